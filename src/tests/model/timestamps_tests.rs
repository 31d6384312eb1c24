use super::*;

fn now() -> OffsetDateTime {
    OffsetDateTime::parse("2026-01-25T12:00:00Z", &Rfc3339).expect("valid now")
}

#[test]
fn relative_mode_uses_coarse_units() {
    let mode = TimestampMode::Relative;
    assert_eq!(fmt_ts(Some("2026-01-25T11:59:30Z"), mode, now()), "just now");
    assert_eq!(fmt_ts(Some("2026-01-25T11:15:00Z"), mode, now()), "45m ago");
    assert_eq!(fmt_ts(Some("2026-01-24T12:00:00Z"), mode, now()), "24h ago");
    assert_eq!(fmt_ts(Some("2026-01-20T12:00:00Z"), mode, now()), "5d ago");
}

#[test]
fn old_and_future_timestamps_fall_back_to_absolute() {
    let mode = TimestampMode::Relative;
    assert_eq!(
        fmt_ts(Some("2025-06-01T08:30:00Z"), mode, now()),
        "2025-06-01 08:30Z"
    );
    assert_eq!(
        fmt_ts(Some("2026-02-01T00:00:00Z"), mode, now()),
        "2026-02-01 00:00Z"
    );
}

#[test]
fn zero_and_missing_timestamps_render_as_never() {
    let mode = TimestampMode::Absolute;
    assert_eq!(fmt_ts(None, mode, now()), "never");
    assert_eq!(fmt_ts(Some(""), mode, now()), "never");
    assert_eq!(fmt_ts(Some("0001-01-01T00:00:00.000Z"), mode, now()), "never");
}

#[test]
fn unparseable_timestamps_are_shown_verbatim() {
    assert_eq!(
        fmt_ts(Some("yesterday"), TimestampMode::Absolute, now()),
        "yesterday"
    );
}

#[test]
fn toggle_flips_between_modes() {
    assert_eq!(TimestampMode::Relative.toggle(), TimestampMode::Absolute);
    assert_eq!(TimestampMode::Absolute.toggle(), TimestampMode::Relative);
}

#[test]
fn absolute_mode_converts_offsets_to_utc() {
    let mode = TimestampMode::Absolute;
    assert_eq!(
        fmt_ts(Some("2026-01-25T11:59:30+02:00"), mode, now()),
        "2026-01-25 09:59Z"
    );
    assert_eq!(
        fmt_ts(Some("2026-03-01T10:00:00.000Z"), mode, now()),
        "2026-03-01 10:00Z"
    );
}
