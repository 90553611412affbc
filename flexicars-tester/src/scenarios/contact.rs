use super::Check;
use anyhow::{Result, ensure};
use flexicars_core::{ContactField, ContactFields, ValidationError, validate};

fn well_formed() -> ContactFields {
    ContactFields {
        first_name: String::from("Meera"),
        last_name: String::from("Iyer"),
        email: String::from("meera@example.in"),
        phone: String::from("(080) 4123-4567"),
        subject: String::from("Airport pickup"),
        message: String::from("Can the Innova meet a 6am flight?"),
    }
}

fn with_value(field: ContactField, value: &str) -> ContactFields {
    let mut entries = well_formed().to_entries();
    entries.insert(field.form_name().to_string(), value.to_string());
    ContactFields::from_entries(&entries)
}

fn expect(fields: &ContactFields, expected: Result<(), ValidationError>) -> Result<()> {
    let actual = validate(fields);
    ensure!(actual == expected, "expected {expected:?}, got {actual:?}");
    Ok(())
}

fn each_blank_field_is_reported() -> Result<()> {
    for field in ContactField::ALL {
        expect(&with_value(field, ""), Err(ValidationError::MissingField(field)))?;
        expect(&with_value(field, " \t "), Err(ValidationError::MissingField(field)))?;
    }
    Ok(())
}

fn missing_beats_malformed() -> Result<()> {
    let mut fields = with_value(ContactField::Message, "");
    fields.email = String::from("not-an-email");
    expect(&fields, Err(ValidationError::MissingField(ContactField::Message)))
}

fn messages_read_naturally() -> Result<()> {
    let message = ValidationError::MissingField(ContactField::FirstName).to_string();
    ensure!(
        message == "Please fill in the first name field.",
        "unexpected message {message:?}"
    );
    Ok(())
}

pub fn checks() -> Vec<Check> {
    vec![
        Check::new("well-formed message passes", expect(&well_formed(), Ok(()))),
        Check::new("blank fields are reported", each_blank_field_is_reported()),
        Check::new(
            "email needs a domain",
            expect(
                &with_value(ContactField::Email, "meera@example"),
                Err(ValidationError::InvalidEmail),
            ),
        ),
        Check::new(
            "phone needs ten digits",
            expect(
                &with_value(ContactField::Phone, "12345"),
                Err(ValidationError::InvalidPhone),
            ),
        ),
        Check::new(
            "phone rejects letters",
            expect(
                &with_value(ContactField::Phone, "call me maybe"),
                Err(ValidationError::InvalidPhone),
            ),
        ),
        Check::new("missing field wins", missing_beats_malformed()),
        Check::new("messages", messages_read_naturally()),
    ]
}
