#![allow(dead_code)]

pub mod employees;
