pub mod company_profile;
pub mod company_setup;
