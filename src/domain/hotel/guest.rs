use std::fmt;

/// Identity data attached to a reservation. The tax id is not checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub name: String,
    pub tax_id: String,
    pub email: String,
    pub phone: String,
}

impl Guest {
    pub fn new(name: impl Into<String>, tax_id: impl Into<String>) -> Guest {
        Guest { name: name.into(), tax_id: tax_id.into(), email: String::new(), phone: String::new() }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Guest {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Guest {
        self.phone = phone.into();
        self
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Tax id: {}", self.name, self.tax_id)
    }
}
