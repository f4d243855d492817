//! Stylesheets embedded in exported documents.

/// A4 page layout with the note header and content typography used for
/// printing or saving as PDF.
pub const PRINT_STYLESHEET: &str = r#"
@page { size: A4; margin: 20mm; }
body {
  max-width: 210mm;
  margin: 0 auto;
  padding: 20mm;
  box-sizing: border-box;
  font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
  font-size: 14px;
  line-height: 1.6;
  color: #333;
  background: white;
}
.notes-header { border-bottom: 2px solid #007bff; padding-bottom: 10px; margin-bottom: 20px; }
.notes-header h1 { margin: 0; font-size: 24px; color: #007bff; font-weight: 600; }
.notes-header p { margin: 5px 0 0 0; font-size: 12px; color: #666; }
.content-area h1 { font-size: 20px; font-weight: 600; margin: 20px 0 12px 0; color: #2c3e50; }
.content-area h2 { font-size: 18px; font-weight: 600; margin: 18px 0 10px 0; color: #34495e; }
.content-area h3 { font-size: 16px; font-weight: 600; margin: 16px 0 8px 0; color: #34495e; }
.content-area h4 { font-size: 15px; font-weight: 600; margin: 14px 0 7px 0; color: #34495e; }
.content-area h5 { font-size: 14px; font-weight: 600; margin: 12px 0 6px 0; color: #34495e; }
.content-area h6 { font-size: 13px; font-weight: 600; margin: 10px 0 5px 0; color: #34495e; }
.content-area p { margin: 12px 0; line-height: 1.6; }
.content-area ul, .content-area ol { margin: 12px 0; padding-left: 25px; }
.content-area li { margin: 6px 0; line-height: 1.5; }
.content-area strong, .content-area b { font-weight: 600; }
.content-area em, .content-area i { font-style: italic; }
.content-area u { text-decoration: underline; }
.content-area blockquote {
  margin: 16px 0;
  padding: 12px 16px;
  border-left: 4px solid #007bff;
  background: #f8f9fa;
  font-style: italic;
}
.content-area table { width: 100%; border-collapse: collapse; margin: 16px 0; }
.content-area th, .content-area td { border: 1px solid #dee2e6; padding: 8px 12px; text-align: left; }
.content-area th { background: #f8f9fa; font-weight: 600; }
.content-area a { color: #007bff; text-decoration: underline; }
.content-area code {
  background: #f8f9fa;
  padding: 2px 4px;
  border-radius: 3px;
  font-family: 'Courier New', monospace;
  font-size: 13px;
}
.content-area pre {
  background: #f8f9fa;
  padding: 12px;
  border-radius: 4px;
  overflow-wrap: break-word;
  white-space: pre-wrap;
}
"#;
