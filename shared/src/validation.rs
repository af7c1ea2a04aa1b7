//! Receipt upload validation.
//!
//! Receipts must be images; the check is by filename suffix only, no
//! content-type inspection.

/// File extensions accepted for a receipt upload.
pub const ALLOWED_RECEIPT_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Whether the given filename carries an allowed receipt extension.
///
/// The comparison is case-insensitive. A name without any extension is
/// rejected.
pub fn is_allowed_receipt(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_RECEIPT_EXTENSIONS.contains(&ext.as_str())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_are_accepted() {
        assert!(is_allowed_receipt("facture.jpg"));
        assert!(is_allowed_receipt("facture.jpeg"));
        assert!(is_allowed_receipt("facture.png"));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_allowed_receipt("FACTURE.JPG"));
        assert!(is_allowed_receipt("scan.Png"));
    }

    #[test]
    fn non_image_files_are_rejected() {
        assert!(!is_allowed_receipt("facture.txt"));
        assert!(!is_allowed_receipt("facture.pdf"));
        assert!(!is_allowed_receipt("facture.jpg.exe"));
    }

    #[test]
    fn names_without_a_real_extension_are_rejected() {
        assert!(!is_allowed_receipt("facture"));
        assert!(!is_allowed_receipt(".jpg"));
        assert!(!is_allowed_receipt(""));
    }
}
