pub mod dolarapi;
