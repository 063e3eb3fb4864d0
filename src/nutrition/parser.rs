/// Split a free-text entry into food names.
///
/// Separators are commas, ampersands and the standalone word "and"
/// (any case). Whitespace inside a name is collapsed to single spaces and
/// empty names are dropped, so "egg,, apple and  toast" yields
/// `["egg", "apple", "toast"]`.
pub fn parse_food_input(input: &str) -> Vec<String> {
    input.split([',', '&']).flat_map(split_on_and).collect()
}

fn split_on_and(segment: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut words: Vec<&str> = Vec::new();

    for word in segment.split_whitespace() {
        if word.eq_ignore_ascii_case("and") {
            flush(&mut words, &mut names);
        } else {
            words.push(word);
        }
    }
    flush(&mut words, &mut names);

    names
}

fn flush(words: &mut Vec<&str>, names: &mut Vec<String>) {
    if !words.is_empty() {
        names.push(words.join(" "));
        words.clear();
    }
}
