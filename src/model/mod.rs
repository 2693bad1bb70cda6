pub mod department;
pub mod education;
pub mod employee;
pub mod id_proof;

pub use department::Department;
pub use education::Education;
pub use employee::{AddressState, Employee, EmployeeId, EmployeeStatus, Gender, MaritalStatus};
pub use id_proof::{IdProof, IdType};
