pub mod booking;
pub mod inquiry;
pub mod institution;
pub mod item;

// 空白だけの文字列は未入力として扱う
pub(crate) fn not_blank(value: &str, _: &()) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("must not be blank"));
    }
    Ok(())
}
