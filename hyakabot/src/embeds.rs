pub fn attachment(filename: impl AsRef<str>) -> String {
    format!("attachment://{}", filename.as_ref())
}
