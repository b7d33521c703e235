// src/specs/results.rs
use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};

use crate::config::consts::RESULTS_TABLE_CLASS;
use crate::core::sanitize::{clean_field, scrub_locale};
use crate::error::ExtractError;

/// Output bundle for one results page.
#[derive(Debug)]
pub struct Extraction {
    /// Finished record lines, one per table row, in document order.
    pub records: Vec<String>,
    /// Cells whose nested table had no locatable body (folded to empty fields).
    pub skipped_cells: usize,
}

impl Extraction {
    /// The CSV text view: one line per record, `\n`-terminated,
    /// no blank line beyond the final newline.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(record);
            out.push('\n');
        }
        out
    }

    /// The field view. Fields never contain `,`, so the two views
    /// reconstruct each other exactly.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.records
            .iter()
            .map(|r| r.split(',').map(String::from).collect())
            .collect()
    }
}

/// Parse one results page into records.
///
/// The page carries a single `<table class="tabela-resultado">`. Its element
/// children are the rows; each row's first `tr` descendant carries the
/// cells. Cells are plain text, a nested value table (rendered as
/// `([a][b]…)`), or empty. Fields lose their commas, records lose trailing
/// commas, and the assembled output loses every `.` and `R$` (locale noise,
/// not structure).
pub fn parse_doc(html_doc: &str) -> Result<Extraction, ExtractError> {
    let doc = Html::parse_document(html_doc);

    let marker = Selector::parse(&format!("table.{RESULTS_TABLE_CLASS}")).unwrap();

    // First marker-class table wins; none means the page shape changed.
    let table = doc
        .select(&marker)
        .next()
        .ok_or(ExtractError::TableMissing { marker: RESULTS_TABLE_CLASS })?;

    let mut records = Vec::new();
    let mut skipped_cells = 0usize;

    for row in table.children().filter_map(ElementRef::wrap) {
        let Some(inner) = first_descendant(row, "tr") else {
            continue; // header/caption wrapper, not a result row
        };

        let mut line = s!();
        for cell in inner.children() {
            line.push_str(&cell_field(cell, &mut skipped_cells));
            line.push(',');
        }
        records.push(scrub_locale(line.trim_end_matches(',')));
    }

    Ok(Extraction { records, skipped_cells })
}

/* ---------------- cell classification ---------------- */

/// Field value for one child of the inner row.
///
/// Shapes, mutually exclusive and in this order: direct text (text wins
/// over anything else in the cell), nested value table, empty. Text nodes
/// sitting between `<td>`s count as cells too.
fn cell_field(cell: NodeRef<'_, Node>, skipped: &mut usize) -> String {
    if let Node::Text(t) = cell.value() {
        return clean_field(&t.text);
    }
    let Some(el) = ElementRef::wrap(cell) else {
        return s!(); // comment/PI: not classified, empty field
    };

    if let Some(text) = sole_text(el) {
        return clean_field(&text);
    }

    let own = own_text(el);
    if own.chars().any(|c| !c.is_whitespace()) {
        return clean_field(&own);
    }

    if let Some(nested) = first_descendant(el, "table") {
        return match composite_token(nested) {
            Some(token) => token,
            None => {
                // Table without a body: unusable, fold to empty but count it.
                *skipped += 1;
                s!()
            }
        };
    }

    s!()
}

/// Composite token for a nested value table: every non-empty text-bearing
/// leaf in the body rows, bracketed and concatenated, the lot wrapped in
/// parentheses. All-empty leaves still produce `()`.
fn composite_token(table: ElementRef<'_>) -> Option<String> {
    let body = first_descendant(table, "tbody")?;

    let mut token = s!("(");
    for subrow in body.children().filter_map(ElementRef::wrap) {
        for leaf in subrow.children() {
            let text = match leaf.value() {
                Node::Text(t) => Some(t.text.to_string()),
                Node::Element(_) => ElementRef::wrap(leaf).and_then(sole_text),
                _ => None,
            };
            if let Some(text) = text {
                if !text.trim().is_empty() {
                    token.push('[');
                    token.push_str(&clean_field(&text));
                    token.push(']');
                }
            }
        }
    }
    token.push(')');
    Some(token)
}

/// A cell like `<td><b>07</b></td>` reads as its single nested text:
/// follow sole children down until exactly one text leaf remains.
fn sole_text(el: ElementRef<'_>) -> Option<String> {
    let mut children = el.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }
    match only.value() {
        Node::Text(t) => Some(t.text.to_string()),
        Node::Element(_) => sole_text(ElementRef::wrap(only)?),
        _ => None,
    }
}

/// The element's own text: direct text-node children only.
fn own_text(el: ElementRef<'_>) -> String {
    let mut out = s!();
    for child in el.children() {
        if let Node::Text(t) = child.value() {
            out.push_str(&t.text);
        }
    }
    out
}

/// First descendant element with the given tag name, document order.
fn first_descendant<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    el.descendants()
        .skip(1) // self
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(table_body: &str) -> String {
        format!(
            r#"<html><head><title>Resultados</title></head><body>
            <table class="tabela-resultado">{table_body}</table>
            </body></html>"#
        )
    }

    #[test]
    fn text_cells_lose_commas() {
        let doc = page(
            "<tbody><tr><td>01</td><td>02,03</td><td>Prize</td></tr></tbody>\
             <tbody><tr><td>04</td><td>05</td><td>Other</td></tr></tbody>",
        );
        let out = parse_doc(&doc).unwrap();
        assert_eq!(out.records, vec!["01,0203,Prize", "04,05,Other"]);
        assert_eq!(out.skipped_cells, 0);
    }

    #[test]
    fn nested_value_table_composites_into_one_token() {
        let doc = page(
            "<tbody><tr>\
               <td>Draw 123</td>\
               <td><table><tbody><tr><td>07</td><td>13</td><td>22</td></tr></tbody></table></td>\
             </tr></tbody>",
        );
        let out = parse_doc(&doc).unwrap();
        assert_eq!(out.records, vec!["Draw 123,([07][13][22])"]);
    }

    #[test]
    fn nested_values_spanning_subrows_keep_document_order() {
        let doc = page(
            "<tbody><tr><td><table><tbody>\
               <tr><td>01</td><td>02</td></tr>\
               <tr><td>03</td></tr>\
             </tbody></table></td></tr></tbody>",
        );
        let out = parse_doc(&doc).unwrap();
        assert_eq!(out.records, vec!["([01][02][03])"]);
    }

    #[test]
    fn empty_cell_renders_as_empty_field() {
        let doc = page("<tbody><tr><td>A</td><td></td><td>C</td></tr></tbody>");
        let out = parse_doc(&doc).unwrap();
        assert_eq!(out.records, vec!["A,,C"]);
    }

    #[test]
    fn trailing_empty_cells_are_dropped_from_the_record() {
        let doc = page("<tbody><tr><td>A</td><td></td><td></td></tr></tbody>");
        let out = parse_doc(&doc).unwrap();
        assert_eq!(out.records, vec!["A"]);
    }

    #[test]
    fn currency_and_thousand_separators_scrub_after_assembly() {
        // Field-level comma strip runs first, the . / R$ scrub runs last
        // over the finished line: "R$ 1.234,00" → "R$ 1.23400" → " 123400".
        let doc = page("<tbody><tr><td>Acc</td><td>R$ 1.234,00</td></tr></tbody>");
        let out = parse_doc(&doc).unwrap();
        assert_eq!(out.records, vec!["Acc, 123400"]);
    }

    #[test]
    fn missing_marker_table_is_not_found() {
        let doc = "<html><body><table class=\"other\"><tbody><tr><td>x</td></tr></tbody></table></body></html>";
        let err = parse_doc(doc).unwrap_err();
        assert!(matches!(err, ExtractError::TableMissing { marker: "tabela-resultado" }));
    }

    #[test]
    fn first_marker_table_wins() {
        let doc = r#"<html><body>
            <table class="tabela-resultado"><tbody><tr><td>first</td></tr></tbody></table>
            <table class="tabela-resultado"><tbody><tr><td>second</td></tr></tbody></table>
            </body></html>"#;
        let out = parse_doc(doc).unwrap();
        assert_eq!(out.records, vec!["first"]);
    }

    #[test]
    fn rows_without_inner_tr_are_skipped() {
        let doc = page(
            "<caption>Resultado</caption>\
             <tbody><tr><td>kept</td></tr></tbody>",
        );
        let out = parse_doc(&doc).unwrap();
        assert_eq!(out.records, vec!["kept"]);
    }

    #[test]
    fn only_the_first_tr_of_a_row_wrapper_counts() {
        let doc = page(
            "<tbody>\
               <tr><td>used</td></tr>\
               <tr><td>ignored</td></tr>\
             </tbody>",
        );
        let out = parse_doc(&doc).unwrap();
        assert_eq!(out.records, vec!["used"]);
    }

    #[test]
    fn formatted_cell_reads_through_sole_child_chain() {
        let doc = page("<tbody><tr><td><b>07</b></td><td><span><i>13</i></span></td></tr></tbody>");
        let out = parse_doc(&doc).unwrap();
        assert_eq!(out.records, vec!["07,13"]);
    }

    #[test]
    fn single_value_nested_table_reads_as_plain_text() {
        // The sole-child chain reaches the one leaf before the nested-table
        // rule ever applies, so no brackets are produced.
        let doc = page(
            "<tbody><tr><td><table><tbody><tr><td>07</td></tr></tbody></table></td></tr></tbody>",
        );
        let out = parse_doc(&doc).unwrap();
        assert_eq!(out.records, vec!["07"]);
    }

    #[test]
    fn text_wins_over_a_nested_table() {
        let doc = page(
            "<tbody><tr><td>Acumulado<table><tbody><tr><td>1</td><td>2</td></tr></tbody></table></td></tr></tbody>",
        );
        let out = parse_doc(&doc).unwrap();
        assert_eq!(out.records, vec!["Acumulado"]);
    }

    #[test]
    fn nested_table_with_only_blank_leaves_yields_bare_parens() {
        let doc = page(
            "<tbody><tr><td><table><tbody><tr><td> </td><td>\n</td></tr></tbody></table></td></tr></tbody>",
        );
        let out = parse_doc(&doc).unwrap();
        assert_eq!(out.records, vec!["()"]);
    }

    #[test]
    fn bodyless_nested_table_is_counted_and_left_empty() {
        let doc = page("<tbody><tr><td>A</td><td><table></table></td><td>C</td></tr></tbody>");
        let out = parse_doc(&doc).unwrap();
        assert_eq!(out.records, vec!["A,,C"]);
        assert_eq!(out.skipped_cells, 1);
    }

    #[test]
    fn whitespace_between_cells_keeps_column_arithmetic() {
        // A bare newline between <td>s is a cell of its own that cleans to
        // an empty field, keeping column positions stable.
        let doc = page("<tbody><tr><td>A</td>\n<td>B</td></tr></tbody>");
        let out = parse_doc(&doc).unwrap();
        assert_eq!(out.records, vec!["A,,B"]);
    }

    #[test]
    fn no_field_ever_contains_a_comma() {
        let doc = page(
            "<tbody><tr><td>1,2</td><td><table><tbody><tr><td>3,4</td><td>5</td></tr></tbody></table></td></tr></tbody>",
        );
        let out = parse_doc(&doc).unwrap();
        for row in out.rows() {
            for field in row {
                assert!(!field.contains(','), "field {field:?} contains a comma");
            }
        }
        assert_eq!(out.records, vec!["12,([34][5])"]);
    }

    #[test]
    fn record_count_matches_rows_with_an_inner_tr() {
        let doc = page(
            "<caption>no tr here</caption>\
             <tbody><tr><td></td></tr></tbody>\
             <tbody><tr><td>x</td></tr></tbody>\
             <tbody><tr><td><table></table></td></tr></tbody>",
        );
        let out = parse_doc(&doc).unwrap();
        // Three wrappers have a tr: three records, however empty.
        assert_eq!(out.records.len(), 3);
        assert_eq!(out.records, vec!["", "x", ""]);
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let doc = page(
            "<tbody><tr><td>R$ 7.000,00</td><td><table><tbody><tr><td>9</td><td>8</td></tr></tbody></table></td></tr></tbody>",
        );
        let a = parse_doc(&doc).unwrap();
        let b = parse_doc(&doc).unwrap();
        assert_eq!(a.to_csv(), b.to_csv());
        assert_eq!(a.skipped_cells, b.skipped_cells);
    }

    #[test]
    fn csv_view_and_row_view_agree() {
        let doc = page(
            "<tbody><tr><td>a</td><td></td><td>b</td></tr></tbody>\
             <tbody><tr><td>c</td></tr></tbody>",
        );
        let out = parse_doc(&doc).unwrap();
        assert_eq!(out.to_csv(), "a,,b\nc\n");
        let rejoined: Vec<String> = out.rows().iter().map(|r| r.join(",")).collect();
        assert_eq!(rejoined, out.records);
    }
}
