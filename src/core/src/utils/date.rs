use chrono::{Datelike, NaiveDate};

pub struct DateUtils;

impl DateUtils {
    /// Whole years elapsed between `birth_date` and `on`.
    pub fn age(birth_date: NaiveDate, on: NaiveDate) -> i32 {
        let mut age = on.year() - birth_date.year();

        if (on.month(), on.day()) < (birth_date.month(), birth_date.day()) {
            age -= 1;
        }

        age
    }

    pub fn is_birthday(birth_date: NaiveDate, date: NaiveDate) -> bool {
        birth_date.month() == date.month() && birth_date.day() == date.day()
    }
}
