pub mod mock_person_validator;

pub use mock_person_validator::MockPersonValidator;
