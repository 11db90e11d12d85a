//! Timestamp formatting for headers and listings.

use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, Local, Utc};

/// RFC 1123 date as used by `Date` and `Last-Modified`, always in GMT.
pub struct HttpDate(pub SystemTime);

impl fmt::Display for HttpDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let datetime = DateTime::<Utc>::from(self.0);
        write!(f, "{}", datetime.format("%a, %d %b %Y %H:%M:%S GMT"))
    }
}

/// Compact modification date shown next to listing entries, in local time.
pub struct ListingDate(pub SystemTime);

impl fmt::Display for ListingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let datetime = DateTime::<Local>::from(self.0);
        write!(f, "{}", datetime.format("%d%b%Y %H:%M"))
    }
}
