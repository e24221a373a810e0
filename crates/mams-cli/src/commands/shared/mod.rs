pub mod limit;
pub mod parse;

#[cfg(test)]
pub mod test_support;
