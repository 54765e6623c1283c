#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
pub mod numerical;
pub mod symbolic;
