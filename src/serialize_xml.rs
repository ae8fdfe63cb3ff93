/// XML serialization module - writes XmlNode trees out as board files
///
/// Every element starts on its own line, indented two spaces per level.
/// Elements with children get a closing tag on its own line, text elements are
/// closed inline and empty elements self-close.

use crate::xml_node::XmlNode;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// XML declaration line emitted ahead of every board document
pub const XML_DECLARATION: &str = "<?xml version = \"1.0\" encoding = \"UTF-8\" ?>\n";

/// Document type line emitted after the declaration
pub const EAGLE_DOCTYPE: &str = "<!DOCTYPE eagle SYSTEM \"eagle.dtd\">\n";

/// Children beyond this count are serialized in parallel
const PARALLEL_CHILD_THRESHOLD: usize = 64;

/// Serializes a node and all its descendants, starting at `indent_level`
pub fn serialize(node: &XmlNode, indent_level: usize) -> String {
    let mut out = String::with_capacity(1024);
    write_node_pretty(node, &mut out, indent_level);
    out
}

impl fmt::Display for XmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self, 0))
    }
}

/// Full board document: declaration, doctype, then the tree
pub fn document_to_string(root: &XmlNode) -> String {
    let mut out = String::with_capacity(64 * 1024);
    out.push_str(XML_DECLARATION);
    out.push_str(EAGLE_DOCTYPE);
    write_node_pretty(root, &mut out, 0);
    out
}

/// Writes the full board document to any writer (stdout in the CLI)
pub fn write_document<W: Write>(root: &XmlNode, writer: &mut W) -> Result<()> {
    let document = document_to_string(root);
    writer
        .write_all(document.as_bytes())
        .context("Failed to write board document")?;
    writer.flush().context("Failed to flush board document")?;
    Ok(())
}

/// Serializes the full board document to a file on disk
pub fn document_to_file<P: AsRef<Path>>(root: &XmlNode, file_path: P) -> Result<()> {
    let file = File::create(&file_path).with_context(|| {
        format!("Failed to create board file {}", file_path.as_ref().display())
    })?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    write_document(root, &mut writer)
}

fn write_node_pretty(node: &XmlNode, out: &mut String, indent_level: usize) {
    write_indent(out, indent_level);
    out.push('<');
    out.push_str(node.name());

    for (key, value) in node.attributes() {
        out.push(' ');
        out.push_str(key);
        out.push_str(" = \"");
        write_escaped_attr(out, &value.to_string());
        out.push('"');
    }

    // Children win over text; XmlNode refuses to hold both anyway.
    if !node.children().is_empty() {
        out.push_str(">\n");

        // Wide nodes (layers, signals) render each child into its own buffer
        // in parallel; buffers are joined in order so the output is unchanged.
        if node.children().len() > PARALLEL_CHILD_THRESHOLD {
            let child_buffers: Vec<String> = node
                .children()
                .par_iter()
                .map(|child| serialize(child, indent_level + 1))
                .collect();
            for buf in child_buffers {
                out.push_str(&buf);
            }
        } else {
            for child in node.children() {
                write_node_pretty(child, out, indent_level + 1);
            }
        }

        write_indent(out, indent_level);
        out.push_str("</");
        out.push_str(node.name());
        out.push_str(">\n");
    } else if let Some(text) = node.text() {
        out.push('>');
        write_escaped_text(out, text);
        out.push_str("</");
        out.push_str(node.name());
        out.push_str(">\n");
    } else {
        out.push_str(" />\n");
    }
}

fn write_indent(out: &mut String, indent_level: usize) {
    for _ in 0..indent_level {
        out.push_str("  ");
    }
}

/// Escapes special XML characters in attribute values
fn write_escaped_attr(out: &mut String, input: &str) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
}

fn write_escaped_text(out: &mut String, input: &str) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
