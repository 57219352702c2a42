//! IFSC bank codes (first four characters of an IFSC).
//!
//! Merged banks keep their prefix here because their branch codes are
//! still printed on existing cheques.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref BANK_CODES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("SBIN", "State Bank of India");
        m.insert("HDFC", "HDFC Bank");
        m.insert("ICIC", "ICICI Bank");
        m.insert("UTIB", "Axis Bank");
        m.insert("PUNB", "Punjab National Bank");
        m.insert("BKID", "Bank of India");
        m.insert("BARB", "Bank of Baroda");
        m.insert("CNRB", "Canara Bank");
        m.insert("UBIN", "Union Bank of India");
        m.insert("IOBA", "Indian Overseas Bank");
        m.insert("IDIB", "Indian Bank");
        m.insert("CBIN", "Central Bank of India");
        m.insert("MAHB", "Bank of Maharashtra");
        m.insert("ORBC", "Oriental Bank of Commerce");
        m.insert("ALLA", "Allahabad Bank");
        m.insert("ANDB", "Andhra Bank");
        m.insert("SYNB", "Syndicate Bank");
        m.insert("CORP", "Corporation Bank");
        m.insert("VYSA", "ING Vysya Bank");
        m.insert("KKBK", "Kotak Mahindra Bank");
        m.insert("YESB", "Yes Bank");
        m.insert("INDB", "IndusInd Bank");
        m.insert("FDRL", "Federal Bank");
        m
    };
}

/// Whether `code` is a known four-letter bank prefix.
pub fn is_known_bank(code: &str) -> bool {
    BANK_CODES.contains_key(code)
}

/// Bank name for a four-letter prefix.
pub fn bank_name(code: &str) -> Option<&'static str> {
    BANK_CODES.get(code).copied()
}
