pub mod eddsa;
pub mod es256;
pub mod secp256k1;
