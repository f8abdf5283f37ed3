pub mod spinner;
