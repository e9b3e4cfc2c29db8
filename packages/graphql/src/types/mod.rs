pub mod dashboard;
pub mod field_value;
pub mod form;

pub use dashboard::{DirectoryColumn, DirectoryView, PatientWelcome, RowMenu};
pub use field_value::{FieldValueInput, FieldValueView};
pub use form::{FieldView, FormView, PasswordStrengthView, SectionView};
