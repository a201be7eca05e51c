pub mod client;
pub mod face_verifier;
