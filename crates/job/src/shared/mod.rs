pub mod batch;
pub mod usecase;
