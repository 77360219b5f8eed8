//! Accent folding for transaction-label comparison.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold a label for matching: NFKD-decompose, drop combining marks,
/// lowercase. "Depósito em Reais" becomes "deposito em reais".
pub fn fold(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_strips_accents() {
        assert_eq!(fold("Depósito em Reais"), "deposito em reais");
        assert_eq!(fold("Taxa de Transação"), "taxa de transacao");
        assert_eq!(fold("Concluído"), "concluido");
    }

    #[test]
    fn test_fold_plain_ascii() {
        assert_eq!(fold("Redeemed Bonus"), "redeemed bonus");
        assert_eq!(fold("COMPRA"), "compra");
    }

    #[test]
    fn test_fold_empty() {
        assert_eq!(fold(""), "");
    }
}
