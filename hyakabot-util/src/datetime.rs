use time::format_description::{
    modifier::{Day, Hour, Minute, Month, Second, Year},
    Component, FormatItem,
};

/// `DD/MM/YYYY`, the way account creation dates are shown
pub const DATE_FORMAT: &[FormatItem<'_>] = &[
    FormatItem::Component(Component::Day(Day::default())),
    FormatItem::Literal(b"/"),
    FormatItem::Component(Component::Month(Month::default())),
    FormatItem::Literal(b"/"),
    FormatItem::Component(Component::Year(Year::default())),
];

pub const TIME_FORMAT: &[FormatItem<'_>] = &[
    FormatItem::Component(Component::Hour(Hour::default())),
    FormatItem::Literal(b":"),
    FormatItem::Component(Component::Minute(Minute::default())),
    FormatItem::Literal(b":"),
    FormatItem::Component(Component::Second(Second::default())),
];

/// Timestamp format for log lines
pub const NAIVE_DATETIME_FORMAT: &[FormatItem<'_>] = &[
    FormatItem::Component(Component::Year(Year::default())),
    FormatItem::Literal(b"-"),
    FormatItem::Component(Component::Month(Month::default())),
    FormatItem::Literal(b"-"),
    FormatItem::Component(Component::Day(Day::default())),
    FormatItem::Literal(b" "),
    FormatItem::Compound(TIME_FORMAT),
];

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use super::*;

    #[test]
    fn date_format() {
        let date = OffsetDateTime::from_unix_timestamp(1_568_412_797).unwrap();

        assert_eq!(date.format(DATE_FORMAT).unwrap(), "13/09/2019");
    }
}
