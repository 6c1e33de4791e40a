//! Tesseract TSV output parsing

use sanipass_core::OcrBlock;

/// Tesseract's word-level rows; lower levels are pages, blocks, paragraphs, lines
const WORD_LEVEL: u8 = 5;

/// Parse Tesseract TSV output into word blocks.
///
/// TSV fields: level, page_num, block_num, par_num, line_num, word_num,
/// left, top, width, height, conf, text
pub fn parse_tsv(tsv: &str) -> Vec<OcrBlock> {
    let mut blocks = Vec::new();

    for line in tsv.lines() {
        if line.starts_with("level") {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 11 {
            continue;
        }

        if fields[0].trim().parse::<u8>().ok() != Some(WORD_LEVEL) {
            continue;
        }

        let (Ok(left), Ok(top), Ok(width), Ok(height)) = (
            fields[6].parse::<u32>(),
            fields[7].parse::<u32>(),
            fields[8].parse::<u32>(),
            fields[9].parse::<u32>(),
        ) else {
            tracing::warn!("Skipping malformed TSV row: {}", line);
            continue;
        };

        let confidence = fields[10].trim().parse::<f32>().unwrap_or(-1.0);
        let text = fields.get(11).copied().unwrap_or_default();

        blocks.push(OcrBlock::new(text, left, top, width, height).with_confidence(confidence));
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext
1\t1\t0\t0\t0\t0\t0\t0\t800\t600\t-1\t
4\t1\t1\t1\t1\t0\t10\t5\t300\t15\t-1\t
5\t1\t1\t1\t1\t1\t10\t5\t170\t15\t96.418526\tjdoe@example.com
5\t1\t1\t1\t1\t2\t190\t5\t60\t15\t91\tlogged
5\t1\t1\t1\t1\t3\t260\t5\t10\t15\t-1\t
";

    #[test]
    fn test_parses_word_rows_only() {
        let blocks = parse_tsv(SAMPLE);

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].text, "jdoe@example.com");
        assert_eq!(
            (blocks[0].left, blocks[0].top, blocks[0].width, blocks[0].height),
            (10, 5, 170, 15)
        );
        assert!((blocks[0].confidence - 96.418526).abs() < 1e-4);
        assert_eq!(blocks[1].confidence, 91.0);
    }

    #[test]
    fn test_keeps_empty_text() {
        let blocks = parse_tsv(SAMPLE);
        assert_eq!(blocks[2].text, "");
        assert_eq!(blocks[2].confidence, -1.0);
    }

    #[test]
    fn test_skips_malformed_rows() {
        let tsv = "5\t1\t1\t1\t1\t1\tx\t5\t10\t10\t90\tbad\n5\t1\t1\n";
        assert!(parse_tsv(tsv).is_empty());
    }

    #[test]
    fn test_blocks_start_untagged() {
        let blocks = parse_tsv(SAMPLE);
        assert!(blocks.iter().all(|b| !b.is_sensitive()));
    }
}
