//! Turns a `mealServiceDietInfo` XML body into an [`ApiOutcome`].
//!
//! The body is read into a small element tree first, so that a truncated or
//! otherwise broken document is rejected as a whole before any row is read.
//! Lookups follow `getElementsByTagName` semantics: first match in document
//! order, searching all descendants.

use crate::domain::model::{ApiOutcome, RawMealRow};
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

pub const NO_DATA_CODE: &str = "INFO-200";
pub const DEFAULT_NO_DATA_MESSAGE: &str = "데이터가 없습니다.";

pub const RESULT_ELEMENT: &str = "RESULT";
pub const CONTAINER_ELEMENT: &str = "mealServiceDietInfo";
pub const ROW_ELEMENT: &str = "row";

pub const FIELD_MEAL_SLOT_CODE: &str = "MMEAL_SC_CODE";
pub const FIELD_DISH_NAMES: &str = "DDISH_NM";
pub const FIELD_SERVICE_DATE: &str = "MLSV_YMD";
pub const FIELD_CALORIE_INFO: &str = "MLSV_FGR";

#[derive(Debug, Default)]
struct XmlNode {
    name: String,
    /// Concatenated text of this element and all its descendants.
    text: String,
    children: Vec<XmlNode>,
}

impl XmlNode {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// First descendant (not self) named `name`, in document order.
    fn find(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find_map(|child| child.find_inclusive(name))
    }

    fn find_inclusive(&self, name: &str) -> Option<&XmlNode> {
        if self.name == name {
            Some(self)
        } else {
            self.find(name)
        }
    }

    fn find_all<'a>(&'a self, name: &str, out: &mut Vec<&'a XmlNode>) {
        for child in &self.children {
            if child.name == name {
                out.push(child);
            }
            child.find_all(name, out);
        }
    }

    fn child_text(&self, name: &str) -> Option<String> {
        self.find(name).map(|node| node.text.clone())
    }
}

fn parse_document(raw_text: &str) -> Result<XmlNode, String> {
    let mut reader = Reader::from_str(raw_text);
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| format!("at byte {}: {}", reader.error_position(), e))?;

        match event {
            Event::Start(e) => {
                let name = element_name(&e)?;
                if stack.is_empty() && root.is_some() {
                    return Err(format!("second root element <{}>", name));
                }
                stack.push(XmlNode::new(name));
            }
            Event::Empty(e) => {
                let node = XmlNode::new(element_name(&e)?);
                close_element(node, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| "end tag without matching start".to_string())?;
                close_element(node, &mut stack, &mut root)?;
            }
            Event::Text(t) => append_text(&mut stack, &String::from_utf8_lossy(&t))?,
            Event::CData(c) => append_text(&mut stack, &String::from_utf8_lossy(&c))?,
            Event::GeneralRef(r) => {
                let resolved = match r.resolve_char_ref().map_err(|e| e.to_string())? {
                    Some(ch) => ch.to_string(),
                    None => {
                        let entity = String::from_utf8_lossy(&r).into_owned();
                        resolve_predefined_entity(&entity)
                            .ok_or_else(|| format!("unknown entity &{};", entity))?
                            .to_string()
                    }
                };
                append_text(&mut stack, &resolved)?;
            }
            Event::Eof => break,
            // 선언, 주석, PI, DOCTYPE 은 무시
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(format!("unexpected end of input inside <{}>", open.name));
    }
    root.ok_or_else(|| "document has no root element".to_string())
}

/// Tag name, after checking that every attribute is well-formed.
fn element_name(e: &BytesStart<'_>) -> Result<String, String> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    for attr in e.attributes() {
        attr.map_err(|err| format!("bad attribute in <{}>: {}", name, err))?;
    }
    Ok(name)
}

fn close_element(
    node: XmlNode,
    stack: &mut Vec<XmlNode>,
    root: &mut Option<XmlNode>,
) -> Result<(), String> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(node);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(node);
            Ok(())
        }
        None => Err(format!("second root element <{}>", node.name)),
    }
}

fn append_text(stack: &mut [XmlNode], text: &str) -> Result<(), String> {
    if stack.is_empty() {
        if text.trim().is_empty() {
            return Ok(());
        }
        return Err("text outside the root element".to_string());
    }
    for open in stack.iter_mut() {
        open.text.push_str(text);
    }
    Ok(())
}

fn extract_row(row: &XmlNode) -> RawMealRow {
    RawMealRow {
        meal_slot_code: row.child_text(FIELD_MEAL_SLOT_CODE),
        dish_text: row.child_text(FIELD_DISH_NAMES),
        service_date: row.child_text(FIELD_SERVICE_DATE),
        calorie_info: row.child_text(FIELD_CALORIE_INFO),
    }
}

/// Interprets a raw response body. Pure; performs no I/O.
pub fn interpret(raw_text: &str) -> ApiOutcome {
    let root = match parse_document(raw_text) {
        Ok(root) => root,
        Err(reason) => {
            tracing::debug!("XML parse failed: {}", reason);
            return ApiOutcome::MalformedResponse;
        }
    };

    if let Some(result) = root.find_inclusive(RESULT_ELEMENT) {
        let is_no_data = result
            .find("CODE")
            .is_some_and(|code| code.text.trim() == NO_DATA_CODE);
        if is_no_data {
            let message = result
                .child_text("MESSAGE")
                .unwrap_or_else(|| DEFAULT_NO_DATA_MESSAGE.to_string());
            tracing::debug!("API reported no data: {}", message);
            return ApiOutcome::NoData(message);
        }
    }

    let Some(container) = root.find_inclusive(CONTAINER_ELEMENT) else {
        tracing::debug!("<{}> element missing from response", CONTAINER_ELEMENT);
        return ApiOutcome::NotFound;
    };

    let mut rows = Vec::new();
    container.find_all(ROW_ELEMENT, &mut rows);
    tracing::debug!("Parsed {} meal rows", rows.len());

    ApiOutcome::Success(rows.into_iter().map(extract_row).collect())
}
