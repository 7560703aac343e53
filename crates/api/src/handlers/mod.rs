pub mod planet;
pub mod scientist;
