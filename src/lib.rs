pub mod commands;
pub mod domain;
pub mod services;

#[cfg(test)]
mod test_support;
