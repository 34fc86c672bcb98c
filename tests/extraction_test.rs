use babynames::{extract, extract_bytes, Error};

const BABY_1990: &str = r##"
<html>
<head><title>Popular Baby Names</title></head>
<body>
<h3 align="center">Popularity in 1990</h3>
<table width="48%" border="1" bordercolor="#aaabbb">
<tr align="center" valign="bottom">
  <th scope="col" width="12%" bgcolor="#efefef">Rank</th>
  <th scope="col" width="41%" bgcolor="#99ccff">Male name</th>
  <th scope="col" bgcolor="pink" width="41%">Female name</th></tr>
<tr align="right"><td>1</td><td>Michael</td><td>Jessica</td>
<tr align="right"><td>2</td><td>Christopher</td><td>Ashley</td>
<tr align="right"><td>3</td><td>Matthew</td><td>Brittany</td>
<tr align="right"><td>4</td><td>Joshua</td><td>Amanda</td>
<tr align="right"><td>5</td><td>Daniel</td><td>Samantha</td>
<tr align="right"><td>6</td><td>Jordan</td><td>Jordan</td>
<tr align="right"><td>7</td><td>Ashley</td><td>Taylor</td>
</table>
</body>
</html>
"##;

fn lines(text: &str) -> Vec<String> {
    match extract(text) {
        Ok(report) => report.lines(),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn end_to_end_example() {
    let text = "Popularity in 1990</h3><tr><td>1</td><td>Michael</td><td>Jessica</td><tr><td>2</td><td>Christopher</td><td>Ashley</td>";
    assert_eq!(
        lines(text),
        vec!["1990", "Ashley 2", "Christopher 2", "Jessica 1", "Michael 1"]
    );
}

#[test]
fn year_only_page() {
    assert_eq!(lines("<h3>Popularity in 2000</h3><table></table>"), vec!["2000"]);
}

#[test]
fn duplicate_name_keeps_first_seen_rank() {
    let text = "Popularity in 1995<td>1</td><td>Alice</td><td>Bob</td><td>2</td><td>Eve</td><td>Alice</td>";
    let lines = lines(text);
    assert!(lines.contains(&"Alice 1".to_string()));
    assert!(!lines.contains(&"Alice 2".to_string()));
}

#[test]
fn first_seen_beats_numerically_smaller_rank() {
    let text = "Popularity in 1995<td>9</td><td>Sam</td><td>Kim</td><td>1</td><td>Lee</td><td>Sam</td>";
    assert_eq!(lines(text), vec!["1995", "Kim 9", "Lee 1", "Sam 9"]);
}

#[test]
fn full_page_is_sorted_and_unique() {
    let lines = lines(BABY_1990);
    assert_eq!(lines[0], "1990");

    let names: Vec<&str> = lines[1..]
        .iter()
        .filter_map(|l| l.split_once(' ').map(|(name, _)| name))
        .collect();
    assert_eq!(names.len(), lines.len() - 1);
    assert!(names.windows(2).all(|w| w[0] < w[1]));

    // Jordan appears twice in row 6; Ashley first appears in the girls column.
    assert!(lines.contains(&"Jordan 6".to_string()));
    assert!(lines.contains(&"Ashley 2".to_string()));
    assert_eq!(lines.len(), 1 + 12);
}

#[test]
fn header_cells_are_not_rows() {
    let lines = lines(BABY_1990);
    assert!(!lines.iter().any(|l| l.starts_with("Rank") || l.contains("name")));
}

#[test]
fn missing_year_is_an_error() {
    let text = "<tr><td>1</td><td>Michael</td><td>Jessica</td>";
    match extract(text) {
        Err(Error::MissingYear { path }) => assert!(path.is_none()),
        other => panic!("expected MissingYear, got {other:?}"),
    }
}

#[test]
fn malformed_rows_are_skipped() {
    let text = "Popularity in 1990\
        <td>x</td><td>Bad</td><td>Row</td>\
        <td>1</td><td>Mary Ann</td><td>Jo</td>\
        <td>2</td><td>Good</td><td>Row</td>";
    assert_eq!(lines(text), vec!["1990", "Good 2", "Row 2"]);
}

#[test]
fn extract_bytes_decodes_declared_charset() {
    let page = b"<meta charset=\"windows-1252\">Popularity in 1992<td>4</td><td>Andr\xE9</td><td>Zo\xEB</td>";
    match extract_bytes(page) {
        Ok(report) => assert_eq!(report.lines(), vec!["1992", "Andr\u{e9} 4", "Zo\u{eb} 4"]),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extraction_is_deterministic() {
    let first = extract(BABY_1990).map(|r| r.to_text());
    let second = extract(BABY_1990).map(|r| r.to_text());
    match (first, second) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        other => panic!("expected two reports, got {other:?}"),
    }
}

#[test]
fn invalid_bytes_in_a_name_are_an_error() {
    let page = b"Popularity in 1990<td>1</td><td>Mich\xFFael</td><td>Jessica</td>";
    match extract_bytes(page) {
        Err(Error::InvalidEncoding { encoding, path }) => {
            assert_eq!(encoding, "UTF-8");
            assert!(path.is_none());
        }
        other => panic!("expected InvalidEncoding, got {other:?}"),
    }
}

#[test]
fn utf16_declaration_reads_as_utf8() {
    let page = b"<meta charset=\"utf-16\"><h3>Popularity in 1990</h3><td>1</td><td>Michael</td><td>Jessica</td>";
    match extract_bytes(page) {
        Ok(report) => assert_eq!(report.lines(), vec!["1990", "Jessica 1", "Michael 1"]),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}
