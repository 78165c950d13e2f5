use time_measure::report::{Format, run};

#[test]
fn hundred_lines_of_triangular_numbers() {
    let mut out = vec![];
    run(100, Format::Text, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(100, lines.len());
    for (i, line) in (0u64..).zip(lines) {
        let (value, rest) = line.split_once(" took ").unwrap();
        assert_eq!(i * (i + 1) / 2, value.parse::<u64>().unwrap(), "line {line:?}");
        let secs = rest.strip_suffix(" seconds.").unwrap();
        assert!(secs.parse::<f64>().unwrap() >= 0.0, "line {line:?}");
    }
}

#[test]
fn text_output_ends_with_newline() {
    let mut out = vec![];
    run(3, Format::Text, &mut out).unwrap();
    assert!(out.ends_with(b" seconds.\n"));
    assert_eq!(3, out.iter().filter(|&&b| b == b'\n').count());
}
