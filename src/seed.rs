//! Bundled sample records used to seed an empty store.

use chrono::NaiveDate;

use crate::employee::Employee;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Three sample employees, the default seed for `Directory::open`.
pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "1".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@example.com".into(),
            phone: "1234567890".into(),
            position: "Software Engineer".into(),
            department: "Engineering".into(),
            hire_date: date(2020, 1, 15),
            salary: 1_200_000.0,
        },
        Employee {
            id: "2".into(),
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane.smith@example.com".into(),
            phone: "9876543210".into(),
            position: "Product Manager".into(),
            department: "Product".into(),
            hire_date: date(2019, 5, 20),
            salary: 1_500_000.0,
        },
        Employee {
            id: "3".into(),
            first_name: "Michael".into(),
            last_name: "Johnson".into(),
            email: "michael.j@example.com".into(),
            phone: "5551234567".into(),
            position: "UX Designer".into(),
            department: "Design".into(),
            hire_date: date(2021, 3, 10),
            salary: 900_000.0,
        },
    ]
}
