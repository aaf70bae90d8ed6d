use crate::services::simulation_types::{CapacityReport, PoolReport};

pub fn format_capacity_report(report: &CapacityReport) -> String {
    let seed = match report.seed {
        Some(value) => value.to_string(),
        None => "entropy".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("Capacity Simulation Report".to_string());
    lines.push(format!("Iterations: {}", report.iterations));
    lines.push(format!("Seed: {seed}"));
    lines.push(format!("Hours per FTE: {:.2}", report.hours_per_fte));
    lines.push(String::new());
    lines.push("Pool | FTE | Capacity (h) | Saturation | Utilization | P95 FTE".to_string());
    lines.push("-----|-----|--------------|------------|-------------|--------".to_string());
    for pool in &report.pools {
        lines.push(format_pool_row(pool));
    }

    lines.join("\n")
}

fn format_pool_row(pool: &PoolReport) -> String {
    format!(
        "{label} | {fte:.2} | {capacity:.2} | {saturation} | {utilization} | {p95:.2}",
        label = pool.pool.label(),
        fte = pool.fte,
        capacity = pool.capacity_hours,
        saturation = format_percent(pool.saturation_probability),
        utilization = format_percent(pool.mean_utilization),
        p95 = pool.p95_fte,
    )
}

fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}%", value * 100.0)
    } else {
        format!("{value}")
    }
}
