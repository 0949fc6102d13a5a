//! Post-processing passes that make a raw diff easier to read.
//!
//! Both passes only regroup text between spans, so the old and new texts a
//! diff reconstructs are never altered.

use log::trace;

use crate::diff_span::{DiffOp, DiffSpan};
use crate::text_diff::DiffGranularity;

/// Edit cost used when nothing else is configured
pub const DEFAULT_EDIT_COST: usize = 8;

/// Fold short equalities that sit between edits into the surrounding edits.
///
/// An equality is absorbed when it is shorter than `edit_cost` characters and
/// has an insertion and a deletion on both sides, or when it is shorter than
/// half of `edit_cost` and has three of those four edits around it.
pub fn cleanup_efficiency(spans: &mut Vec<DiffSpan>, edit_cost: usize) {
    cleanup_efficiency_at(spans, edit_cost, DiffGranularity::Char);
}

/// Like [`cleanup_efficiency`], but never splits a word or line token when
/// `granularity` is coarser than characters
pub fn cleanup_efficiency_at(
    spans: &mut Vec<DiffSpan>,
    edit_cost: usize,
    granularity: DiffGranularity,
) {
    if spans.is_empty() {
        return;
    }

    let mut changes = false;
    // Indices of candidate equalities
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<String> = None;

    // Edits before and after the most recent candidate equality
    let mut pre_ins = false;
    let mut pre_del = false;
    let mut post_ins = false;
    let mut post_del = false;

    let mut pointer: isize = 0;
    while (pointer as usize) < spans.len() {
        let index = pointer as usize;
        if spans[index].op == DiffOp::Equal {
            if spans[index].char_len() < edit_cost && (post_ins || post_del) {
                equalities.push(index);
                pre_ins = post_ins;
                pre_del = post_del;
                last_equality = Some(spans[index].text.clone());
            } else {
                equalities.clear();
                last_equality = None;
            }
            post_ins = false;
            post_del = false;
        } else {
            if spans[index].op == DiffOp::Delete {
                post_del = true;
            } else {
                post_ins = true;
            }

            let absorb = match &last_equality {
                Some(equality) if !equality.is_empty() => {
                    let surrounding = [pre_ins, pre_del, post_ins, post_del]
                        .iter()
                        .filter(|&&edit| edit)
                        .count();
                    surrounding == 4
                        || (equality.chars().count() * 2 < edit_cost && surrounding == 3)
                }
                _ => false,
            };

            if absorb {
                if let (Some(equality), Some(at)) = (last_equality.take(), equalities.pop()) {
                    trace!("absorbing equality {:?} at span {}", equality, at);
                    // The equality becomes a deletion followed by an insertion
                    spans.insert(at, DiffSpan::delete(equality));
                    spans[at + 1].op = DiffOp::Insert;

                    if pre_ins && pre_del {
                        post_ins = true;
                        post_del = true;
                        equalities.clear();
                    } else {
                        // Step back to re-examine the previous equality
                        equalities.pop();
                        pointer = equalities.last().map_or(-1, |&i| i as isize);
                        post_ins = false;
                        post_del = false;
                    }
                    changes = true;
                }
            }
        }
        pointer += 1;
    }

    if changes {
        cleanup_merge_at(spans, granularity);
    }
}

/// Normalize a diff: merge neighbouring spans of the same kind, factor text
/// shared by a deletion and an insertion out into equalities, drop empty
/// spans and slide single edits sideways when that lets equalities merge.
pub fn cleanup_merge(spans: &mut Vec<DiffSpan>) {
    cleanup_merge_at(spans, DiffGranularity::Char);
}

/// Normalize a diff whose spans are made of `granularity` tokens.
///
/// Factoring shared text and sliding edits both work on characters, so for
/// word and line diffs only the merging of neighbouring spans is done.
pub fn cleanup_merge_at(spans: &mut Vec<DiffSpan>, granularity: DiffGranularity) {
    let split_tokens = granularity == DiffGranularity::Char;

    // Sentinel so the final run of edits gets flushed
    spans.push(DiffSpan::equal(""));

    let mut pointer = 0;
    let mut count_delete = 0;
    let mut count_insert = 0;
    let mut text_delete = String::new();
    let mut text_insert = String::new();

    while pointer < spans.len() {
        match spans[pointer].op {
            DiffOp::Insert => {
                count_insert += 1;
                text_insert.push_str(&spans[pointer].text);
                pointer += 1;
            }
            DiffOp::Delete => {
                count_delete += 1;
                text_delete.push_str(&spans[pointer].text);
                pointer += 1;
            }
            DiffOp::Equal => {
                if count_delete + count_insert > 1 {
                    if split_tokens && count_delete != 0 && count_insert != 0 {
                        let prefix = common_prefix(&text_insert, &text_delete);
                        if prefix != 0 {
                            let run_start = pointer - count_delete - count_insert;
                            if run_start > 0 && spans[run_start - 1].op == DiffOp::Equal {
                                spans[run_start - 1]
                                    .text
                                    .push_str(&text_insert[..prefix]);
                            } else {
                                spans.insert(0, DiffSpan::equal(&text_insert[..prefix]));
                                pointer += 1;
                            }
                            text_insert.drain(..prefix);
                            text_delete.drain(..prefix);
                        }

                        let suffix = common_suffix(&text_insert, &text_delete);
                        if suffix != 0 {
                            let shared = text_insert.split_off(text_insert.len() - suffix);
                            text_delete.truncate(text_delete.len() - suffix);
                            spans[pointer].text.insert_str(0, &shared);
                        }
                    }

                    // Replace the run of edits with at most one deletion and one insertion
                    pointer -= count_delete + count_insert;
                    spans.drain(pointer..pointer + count_delete + count_insert);
                    if !text_delete.is_empty() {
                        spans.insert(pointer, DiffSpan::delete(std::mem::take(&mut text_delete)));
                        pointer += 1;
                    }
                    if !text_insert.is_empty() {
                        spans.insert(pointer, DiffSpan::insert(std::mem::take(&mut text_insert)));
                        pointer += 1;
                    }
                    pointer += 1;
                } else if pointer != 0 && spans[pointer - 1].op == DiffOp::Equal {
                    let merged = spans.remove(pointer);
                    spans[pointer - 1].text.push_str(&merged.text);
                } else {
                    pointer += 1;
                }
                count_insert = 0;
                count_delete = 0;
                text_delete.clear();
                text_insert.clear();
            }
        }
    }
    if spans.last().is_some_and(|span| span.text.is_empty()) {
        spans.pop();
    }
    if !split_tokens {
        return;
    }

    // Second pass: look for single edits surrounded on both sides by
    // equalities which can be shifted sideways to eliminate an equality,
    // e.g. A<ins>BA</ins>C -> <ins>AB</ins>AC
    let mut changes = false;
    let mut pointer = 1;
    while pointer + 1 < spans.len() {
        if spans[pointer - 1].op == DiffOp::Equal && spans[pointer + 1].op == DiffOp::Equal {
            let previous = spans[pointer - 1].text.clone();
            let next = spans[pointer + 1].text.clone();
            let current = &spans[pointer].text;

            if current.ends_with(previous.as_str()) {
                let kept = &current[..current.len() - previous.len()];
                spans[pointer].text = format!("{}{}", previous, kept);
                spans[pointer + 1].text = format!("{}{}", previous, next);
                spans.remove(pointer - 1);
                changes = true;
            } else if current.starts_with(next.as_str()) {
                let shifted = format!("{}{}", &current[next.len()..], next);
                spans[pointer - 1].text.push_str(&next);
                spans[pointer].text = shifted;
                spans.remove(pointer + 1);
                changes = true;
            }
        }
        pointer += 1;
    }

    if changes {
        cleanup_merge(spans);
    }
}

/// Byte length of the common prefix of two strings, on a char boundary
fn common_prefix(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}

/// Byte length of the common suffix of two strings, on a char boundary
fn common_suffix(a: &str, b: &str) -> usize {
    a.chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}
