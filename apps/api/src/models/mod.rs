pub mod company_table;
pub mod profile;
pub mod rubric;
pub mod salary;
