// Benchmark helpers are only used from sibling bench files, which dead code
// analysis can't see.
#[allow(dead_code)]
pub fn generate_editor_html(size: usize) -> String {
    let base = "<h2>Section</h2><p>Paragraph with <strong>bold</strong>, <em>italic</em> and <u>underlined</u> words.</p><ul><li>First point</li><li>Second point</li></ul><ol><li>Step one</li><li>Step two</li></ol><blockquote>A quoted remark</blockquote>";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_structured_text(size: usize) -> String {
    let base = "## Section\n\nParagraph with **bold**, *italic* and __underlined__ words.\n\n• First point\n• Second point\n\n1. Step one\n2. Step two\n\n> A quoted remark\n\n";
    base.repeat(size)
}
