pub mod zbase32;
