// Board-level enums shared between app state and the top bar.

/// Order in which the board lays out event cards.
///
/// `Listed` keeps the catalog's own order; callers author that order
/// deliberately, so it is the default.
#[derive(strum::EnumIter, strum::Display, PartialEq, Eq, Clone, Copy, Default, Debug)]
pub enum BoardOrder {
    #[default]
    #[strum(serialize = "Listed")]
    Listed,
    #[strum(serialize = "Title")]
    Title,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn board_order_labels() {
        let labels: Vec<String> = BoardOrder::iter().map(|o| o.to_string()).collect();
        assert_eq!(labels, vec!["Listed", "Title"]);
        assert_eq!(BoardOrder::default(), BoardOrder::Listed);
    }
}
