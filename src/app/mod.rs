pub mod import_use_case;
pub mod ports;
