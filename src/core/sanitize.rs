// src/core/sanitize.rs

/// Clean one field value: drop surrounding newlines, strip every comma.
/// Commas are the record delimiter and must never survive inside a field.
pub fn clean_field(s: &str) -> String {
    s.trim_matches('\n').chars().filter(|&c| c != ',').collect()
}

/// Strip thousands-separator periods and the `R$` currency marker.
/// Order matters: removing `.` first can expose an `R$` (e.g. `R.$`),
/// which the second pass then removes.
pub fn scrub_locale(s: &str) -> String {
    s.replace('.', "").replace("R$", "")
}

/// File stem for one loto name: lowercase, whitespace to `_`, `+` dropped,
/// common pt-BR accented vowels folded to ASCII.
pub fn slug_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars().flat_map(|c| c.to_lowercase()) {
        match ch {
            c if c.is_whitespace() => out.push('_'),
            '+' => {}
            'á' | 'à' | 'â' | 'ã' => out.push('a'),
            'é' | 'ê' => out.push('e'),
            'í' => out.push('i'),
            'ó' | 'ô' | 'õ' => out.push('o'),
            'ú' => out.push('u'),
            'ç' => out.push('c'),
            c => out.push(c),
        }
    }
    out
}
