pub mod display;
pub mod generate;
pub mod repl;
pub mod slogan;
pub mod themes;

#[cfg(test)]
mod tests;
