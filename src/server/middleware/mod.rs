pub mod rate_limit;
pub mod signature;

#[cfg(test)]
mod test;
