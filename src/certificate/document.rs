//! Printable certificate page
//!
//! A [`CertificateDocument`] is the declarative content of the page: header
//! lines, body lines, footer columns and the certificate number. It is laid
//! out on an A4 landscape SVG page which [`super::render_pdf`] converts.

use std::collections::HashMap;

use crate::palette::Palette;
use crate::renderer::{Frame, Line, SvgConfig, Text};

use super::types::{
    format_date_gb, format_date_us, format_hours, format_track_hours, Certificate, TrackCertificate,
};

/// A4 landscape in PDF points
pub const PAGE_WIDTH: f64 = 842.0;
pub const PAGE_HEIGHT: f64 = 595.0;

const PADDING: f64 = 60.0;
const HEADER_GAP: f64 = 40.0;
const FOOTER_TOP: f64 = 440.0;
const FOOTER_PADDING: f64 = 20.0;

/// Colour role of a line of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ink,
    Muted,
    Faint,
    Accent,
}

impl Tone {
    fn resolve(self, palette: &Palette) -> String {
        match self {
            Tone::Ink => palette.dark(),
            Tone::Muted => palette.muted(),
            Tone::Faint => palette.light(),
            Tone::Accent => palette.primary(),
        }
    }
}

/// One centred line of text with the space left below it
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub size: f64,
    pub bold: bool,
    pub tone: Tone,
    pub margin_bottom: f64,
}

impl TextLine {
    fn new(text: impl Into<String>, size: f64, tone: Tone, margin_bottom: f64) -> Self {
        Self {
            text: text.into(),
            size,
            bold: false,
            tone,
            margin_bottom,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Labelled value in the footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterColumn {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificateDocument {
    pub title: String,
    pub header: Vec<TextLine>,
    pub body: Vec<TextLine>,
    pub footer: Vec<FooterColumn>,
    pub certificate_number: String,
}

/// `https://designengineer.xyz` -> `designengineer.xyz`
fn display_host(origin: &str) -> &str {
    let host = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))
        .unwrap_or(origin);
    host.trim_end_matches('/')
}

fn header(title: &str, title_size: f64) -> Vec<TextLine> {
    vec![
        TextLine::new("DESIGN ENGINEER", 14.0, Tone::Accent, 20.0).bold(),
        TextLine::new(title, title_size, Tone::Ink, 10.0).bold(),
        TextLine::new("The Design Engineer Course", 14.0, Tone::Muted, 40.0),
    ]
}

impl CertificateDocument {
    /// Page for a master certificate; `origin` is the site the verify link points at
    pub fn master(certificate: &Certificate, origin: &str) -> Self {
        let meta = &certificate.metadata;
        Self {
            title: certificate.title.clone(),
            header: header("Certificate of Completion", 36.0),
            body: vec![
                TextLine::new("This is to certify that", 12.0, Tone::Muted, 20.0),
                TextLine::new(&meta.user_name, 28.0, Tone::Ink, 20.0).bold(),
                TextLine::new("has successfully completed all requirements for", 12.0, Tone::Muted, 10.0),
                TextLine::new(meta.platform.title(), 18.0, Tone::Accent, 30.0).bold(),
                TextLine::new(
                    "Design Track \u{2022} Engineering Track \u{2022} Convergence Track",
                    11.0,
                    Tone::Muted,
                    0.0,
                ),
            ],
            footer: vec![
                FooterColumn {
                    label: "ISSUED",
                    value: format_date_us(meta.issued_at),
                },
                FooterColumn {
                    label: "TOTAL TIME",
                    value: format_hours(meta.total_time_spent_seconds),
                },
                FooterColumn {
                    label: "VERIFY AT",
                    value: format!("{}/verify/{}", display_host(origin), certificate.slug),
                },
            ],
            certificate_number: meta.certificate_number.clone(),
        }
    }

    /// Page for a single-track certificate
    pub fn track(certificate: &TrackCertificate, origin: &str) -> Self {
        let meta = &certificate.metadata;
        Self {
            title: certificate.title.clone(),
            header: header("Track Certificate", 32.0),
            body: vec![
                TextLine::new("This is to certify that", 12.0, Tone::Muted, 20.0),
                TextLine::new(&meta.user_name, 28.0, Tone::Ink, 20.0).bold(),
                TextLine::new("has successfully completed the", 12.0, Tone::Muted, 10.0),
                TextLine::new(meta.track.title(), 18.0, Tone::Ink, 8.0).bold(),
                TextLine::new(format!("{} Platform", meta.platform.name()), 12.0, Tone::Accent, 30.0),
                TextLine::new(
                    format!("demonstrating proficiency in {}", meta.track.description()),
                    11.0,
                    Tone::Muted,
                    0.0,
                ),
            ],
            footer: vec![
                FooterColumn {
                    label: "ISSUED",
                    value: format_date_gb(meta.issued_at),
                },
                FooterColumn {
                    label: "TOTAL TIME",
                    value: format_track_hours(meta.total_time_spent_seconds),
                },
                FooterColumn {
                    label: "VERIFY AT",
                    value: format!("{}/verify/{}", display_host(origin), certificate.slug),
                },
            ],
            certificate_number: meta.certificate_number.clone(),
        }
    }

    /// White page colours used for print
    pub fn palette() -> Palette {
        let colors = [
            ("bg", "#ffffff"),
            ("dark", "#171717"),
            ("muted", "#737373"),
            ("light", "#a3a3a3"),
            ("primary", "#E63946"),
            ("border", "#e5e5e5"),
        ];
        Palette {
            name: Some("Certificate".to_string()),
            description: Some("Print colours for certificates".to_string()),
            colors: colors
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        }
    }

    /// Lay the page out as SVG
    pub fn to_svg(&self) -> String {
        let palette = Self::palette();
        let center = PAGE_WIDTH / 2.0;
        let mut svg = Frame::new(self.title.as_str())
            .description(format!("Certificate #{}", self.certificate_number))
            .size(PAGE_WIDTH, PAGE_HEIGHT)
            .builder(&palette);

        let mut y = PADDING;
        for (i, line) in self.header.iter().chain(&self.body).enumerate() {
            y += line.size;
            let mut text = Text::new(center, y, line.text.as_str())
                .font_size(line.size)
                .fill(line.tone.resolve(&palette))
                .centered();
            if line.bold {
                text = text.weight("700");
            }
            svg.add(text);
            y += line.margin_bottom;
            if i + 1 == self.header.len() {
                y += HEADER_GAP;
            }
        }

        svg.add(
            Line::new(PADDING, FOOTER_TOP, PAGE_WIDTH - PADDING, FOOTER_TOP)
                .stroke(palette.resolve_or_default("border"))
                .stroke_width(1.0),
        );
        let column_width = (PAGE_WIDTH - 2.0 * PADDING) / self.footer.len().max(1) as f64;
        let label_y = FOOTER_TOP + FOOTER_PADDING + 9.0;
        for (i, column) in self.footer.iter().enumerate() {
            let x = PADDING + column_width * (i as f64 + 0.5);
            svg.add(
                Text::new(x, label_y, column.label)
                    .font_size(9.0)
                    .fill(palette.light())
                    .centered(),
            );
            svg.add(
                Text::new(x, label_y + 18.0, column.value.as_str())
                    .font_size(11.0)
                    .fill(palette.dark())
                    .centered(),
            );
        }

        svg.add(
            Text::new(center, label_y + 18.0 + 20.0 + 10.0, format!("Certificate #{}", self.certificate_number))
                .font_size(10.0)
                .fill(palette.light())
                .centered(),
        );

        svg.build(&SvgConfig::default().without_class_prefix())
    }

    /// Render the page straight to PDF bytes
    pub fn to_pdf(&self) -> Result<Vec<u8>, super::PdfError> {
        super::render_pdf(&self.to_svg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::types::{CertificateMetadata, Platform, Track, TrackCertificateMetadata};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn master_certificate() -> Certificate {
        Certificate {
            id: "1".into(),
            slug: "cert-web-u1-abcd1234".into(),
            title: "Web Design Engineer Certificate - Ada Lovelace".into(),
            created_at: "2025-01-05T10:00:00Z".into(),
            metadata: CertificateMetadata {
                user_id: "u1".into(),
                user_name: "Ada Lovelace".into(),
                user_email: "ada@example.com".into(),
                platform: Platform::Web,
                issued_at: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
                certificate_number: "DE-M5JFYV40-AB12CD".into(),
                design_completed_at: "2025-01-01".into(),
                engineering_completed_at: "2025-01-02".into(),
                convergence_completed_at: "2025-01-03".into(),
                total_time_spent_seconds: 42 * 3600 + 1800,
            },
        }
    }

    fn track_certificate(seconds: u64) -> TrackCertificate {
        TrackCertificate {
            id: "2".into(),
            slug: "cert-ios-convergence-u1-abcd1234".into(),
            title: "iOS Convergence Track Certificate - Ada Lovelace".into(),
            created_at: "2025-01-05T10:00:00Z".into(),
            metadata: TrackCertificateMetadata {
                user_id: "u1".into(),
                user_name: "Ada Lovelace".into(),
                user_email: "ada@example.com".into(),
                platform: Platform::Ios,
                track: Track::Convergence,
                issued_at: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
                certificate_number: "DE-M5JFYV40-XY98ZW".into(),
                completed_at: "2025-01-04".into(),
                total_time_spent_seconds: seconds,
            },
        }
    }

    #[test]
    fn test_master_content() {
        let doc = CertificateDocument::master(&master_certificate(), "https://designengineer.xyz/");
        let texts: Vec<&str> = doc.header.iter().chain(&doc.body).map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "DESIGN ENGINEER",
                "Certificate of Completion",
                "The Design Engineer Course",
                "This is to certify that",
                "Ada Lovelace",
                "has successfully completed all requirements for",
                "Web Design Engineer",
                "Design Track \u{2022} Engineering Track \u{2022} Convergence Track",
            ]
        );
        assert_eq!(doc.header[1].size, 36.0);
        assert_eq!(
            doc.footer,
            vec![
                FooterColumn {
                    label: "ISSUED",
                    value: "January 5, 2025".into()
                },
                FooterColumn {
                    label: "TOTAL TIME",
                    value: "42 hours".into()
                },
                FooterColumn {
                    label: "VERIFY AT",
                    value: "designengineer.xyz/verify/cert-web-u1-abcd1234".into()
                },
            ]
        );
    }

    #[test]
    fn test_track_content() {
        let doc = CertificateDocument::track(&track_certificate(1200), "https://designengineer.xyz");
        assert_eq!(doc.header[1].text, "Track Certificate");
        assert_eq!(doc.header[1].size, 32.0);
        assert_eq!(doc.body[3].text, "Convergence Track");
        assert_eq!(doc.body[4].text, "iOS Platform");
        assert_eq!(
            doc.body[5].text,
            "demonstrating proficiency in bridging design and development with a holistic approach"
        );
        assert_eq!(doc.footer[0].value, "5 January 2025");
        assert_eq!(doc.footer[1].value, "< 1 hour");
    }

    #[test]
    fn test_svg_page() {
        let svg = CertificateDocument::master(&master_certificate(), "https://designengineer.xyz").to_svg();
        assert!(svg.contains(r#"viewBox="0 0 842 595""#));
        assert!(svg.contains("<title"));
        assert!(svg.contains(r##"fill="#E63946""##));
        assert!(svg.contains("Certificate #DE-M5JFYV40-AB12CD"));
        assert!(svg.contains("designengineer.xyz/verify/cert-web-u1-abcd1234"));
        assert!(svg.contains(r##"stroke="#e5e5e5""##));
    }

    #[test]
    fn test_track_pdf() {
        let pdf = CertificateDocument::track(&track_certificate(7200), "https://designengineer.xyz")
            .to_pdf()
            .unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }
}
