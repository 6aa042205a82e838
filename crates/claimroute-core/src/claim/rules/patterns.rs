//! Label-anchored regex patterns for claim form transcripts.
//!
//! All patterns are case-insensitive and capture the field value in group 1.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Carrier / agency
    pub static ref CARRIER: Regex = Regex::new(
        r"(?i)CARRIER\s*[:\-]?\s*([A-Za-z0-9\s\.,&]+?)(?:NAIC|POLICY|AGENCY|CODE|SUBCODE)"
    ).unwrap();

    pub static ref AGENCY: Regex = Regex::new(
        r"(?i)AGENCY\s*[:\-]?\s*([A-Za-z0-9\s\.,&]+)"
    ).unwrap();

    // Policy
    pub static ref POLICY_NUMBER: Regex = Regex::new(
        r"(?i)POLICY NUMBER\s*[:\-]?\s*([A-Z0-9\-]+)"
    ).unwrap();

    pub static ref EFFECTIVE_DATE: Regex = Regex::new(
        r"(?i)EFFECTIVE DATE\s*[:\-]?\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref EXPIRATION_DATE: Regex = Regex::new(
        r"(?i)EXPIRATION DATE\s*[:\-]?\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // Date and time of loss
    pub static ref DATE_OF_LOSS: Regex = Regex::new(
        r"(?i)DATE OF LOSS\s*(?:AND TIME)?\s*[:\-]?\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref TIME_OF_LOSS: Regex = Regex::new(
        r"(?i)TIME OF LOSS\s*[:\-]?\s*(\d{1,2}:\d{2}\s*(?:AM|PM)?)"
    ).unwrap();

    // Any clock time with a meridiem, used when the time is printed next to the date.
    pub static ref LOOSE_TIME: Regex = Regex::new(
        r"(?i)(\d{1,2}:\d{2}\s*(?:AM|PM))\s*(?:AM|PM)?"
    ).unwrap();

    // People
    pub static ref NAME_OF_INSURED: Regex = Regex::new(
        r"(?i)NAME OF INSURED\s*[:\-]?\s*([^\n]+)"
    ).unwrap();

    pub static ref CLAIMANT: Regex = Regex::new(
        r"(?i)CLAIMANT\s*[:\-]?\s*([^\n]+)"
    ).unwrap();

    pub static ref DRIVER_NAME: Regex = Regex::new(
        r"(?i)DRIVER'S NAME\s*[:\-]?\s*([^\n]+)"
    ).unwrap();

    pub static ref PRIMARY_PHONE: Regex = Regex::new(
        r"(?i)PRIMARY PHONE\s*[:#]?\s*([\d\-\(\)\s]+)"
    ).unwrap();

    // Location and narrative
    pub static ref LOCATION_OF_LOSS: Regex = Regex::new(
        r"(?i)LOCATION OF LOSS\s*[:\-]?\s*([^\n]+)"
    ).unwrap();

    // Runs until the next section label or the end of the text.
    pub static ref DESCRIPTION_OF_ACCIDENT: Regex = Regex::new(
        r"(?is)DESCRIPTION OF ACCIDENT\s*[:\-]?\s*(.*?)(?:AUTHORITY|REPORTED TO|VEHICLE|WITNESSES|$)"
    ).unwrap();

    // Vehicle
    pub static ref MAKE: Regex = Regex::new(
        r"(?i)MAKE\s*[:\-]?\s*([A-Za-z]+)"
    ).unwrap();

    pub static ref MODEL: Regex = Regex::new(
        r"(?i)MODEL\s*[:\-]?\s*([A-Za-z0-9]+)"
    ).unwrap();

    pub static ref YEAR: Regex = Regex::new(
        r"(?i)YEAR\s*[:\-]?\s*(\d{4})"
    ).unwrap();

    pub static ref VIN: Regex = Regex::new(
        r"(?i)V\.?I\.?N\.?\s*[:\-#]?\s*([A-Z0-9]{17})"
    ).unwrap();

    pub static ref PLATE_NUMBER: Regex = Regex::new(
        r"(?i)PLATE NUMBER\s*[:\-]?\s*([A-Z0-9]+)"
    ).unwrap();

    // Damage
    pub static ref ESTIMATED_AMOUNT: Regex = Regex::new(
        r"(?i)ESTIMATED AMOUNT\s*[:\-]?\s*\$?([\d,]+)"
    ).unwrap();

    pub static ref DESCRIBE_DAMAGE: Regex = Regex::new(
        r"(?i)DESCRIBE DAMAGE\s*[:\-]?\s*([^\n]+)"
    ).unwrap();
}
