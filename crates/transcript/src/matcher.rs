use scribe_transcribe_interface::Item;

/// Collect the text of every item whose time window lies fully inside the
/// segment window, in item-stream order.
///
/// Containment, not overlap: `item.start >= seg.start && item.end <=
/// seg.end`. An item straddling a boundary belongs to neither window and is
/// excluded. Items without both timestamps (punctuation, typically) cannot
/// participate and are skipped. Each matched item contributes only its first
/// alternative.
///
/// One linear scan per segment, so reconstruction is O(segments × items).
/// Fine at conversational scale; long-form audio would want the items
/// pre-sorted by start time and a sweep over both streams instead.
pub fn contained_fragments(items: &[Item], window: (f64, f64)) -> Vec<String> {
    let (seg_start, seg_end) = window;

    items
        .iter()
        .filter_map(|item| {
            let (start, end) = item.window()?;
            if start >= seg_start && end <= seg_end {
                item.first_content().map(str::to_string)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(content: &str, window: Option<(&str, &str)>) -> Item {
        let (start_time, end_time) = match window {
            Some((s, e)) => (Some(s.to_string()), Some(e.to_string())),
            None => (None, None),
        };
        serde_json::from_value(serde_json::json!({
            "start_time": start_time,
            "end_time": end_time,
            "alternatives": [{ "content": content }],
        }))
        .unwrap()
    }

    #[test]
    fn containment_not_overlap() {
        let items = vec![
            item("one", Some(("0.0", "1.0"))),
            item("two", Some(("1.0", "2.0"))),
            item("three", Some(("1.5", "2.5"))),
        ];

        let matched = contained_fragments(&items, (0.0, 2.0));
        assert_eq!(matched, ["one", "two"]);
    }

    #[test]
    fn item_straddling_segment_start_is_excluded() {
        let items = vec![item("early", Some(("0.5", "1.5")))];
        assert!(contained_fragments(&items, (0.75, 2.0)).is_empty());
    }

    #[test]
    fn boundary_touching_items_are_included() {
        let items = vec![item("exact", Some(("0.0", "2.0")))];
        assert_eq!(contained_fragments(&items, (0.0, 2.0)), ["exact"]);
    }

    #[test]
    fn untimed_items_are_skipped() {
        let items = vec![item("word", Some(("0.1", "0.9"))), item(".", None)];
        assert_eq!(contained_fragments(&items, (0.0, 1.0)), ["word"]);
    }

    #[test]
    fn first_alternative_wins() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "start_time": "0.0",
            "end_time": "1.0",
            "alternatives": [{ "content": "their" }, { "content": "there" }],
        }))
        .unwrap();

        assert_eq!(contained_fragments(&[item], (0.0, 1.0)), ["their"]);
    }

    #[test]
    fn preserves_item_stream_order() {
        let items = vec![
            item("b", Some(("1.0", "1.5"))),
            item("a", Some(("0.0", "0.5"))),
        ];
        // order comes from the stream, not from timestamps
        assert_eq!(contained_fragments(&items, (0.0, 2.0)), ["b", "a"]);
    }
}
