//! Minimal class-file writer for tests.
//!
//! Produces Java 8 (major 52) class files with an empty body and the
//! requested class-level or method-level annotations.

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[allow(dead_code)]
pub const EXTENSIBLE: &str = "org.elasticsearch.plugin.Extensible";
#[allow(dead_code)]
pub const NAMED_COMPONENT: &str = "org.elasticsearch.plugin.NamedComponent";

enum Member {
    String(u16),
    Int(u16),
    Array(Vec<Member>),
}

struct AnnotationBytes {
    type_index: u16,
    members: Vec<(u16, Member)>,
}

pub struct ClassFileBuilder {
    pool: Vec<Vec<u8>>,
    utf8_index: HashMap<String, u16>,
    this_class: u16,
    super_class: u16,
    class_annotations: Vec<AnnotationBytes>,
    class_attribute: &'static str,
    methods: Vec<(u16, u16, AnnotationBytes)>,
}

#[allow(dead_code)]
impl ClassFileBuilder {
    /// `name` in slash form, e.g. `org/acme/Base`
    pub fn new(name: &str) -> Self {
        let mut builder = Self {
            pool: Vec::new(),
            utf8_index: HashMap::new(),
            this_class: 0,
            super_class: 0,
            class_annotations: Vec::new(),
            class_attribute: "RuntimeVisibleAnnotations",
            methods: Vec::new(),
        };
        builder.this_class = builder.class_ref(name);
        builder.super_class = builder.class_ref("java/lang/Object");
        builder
    }

    pub fn marker(mut self, annotation_class: &str) -> Self {
        let annotation = self.annotation(annotation_class, Vec::new());
        self.class_annotations.push(annotation);
        self
    }

    pub fn named(mut self, annotation_class: &str, value: &str) -> Self {
        let key = self.utf8("value");
        let value = Member::String(self.utf8(value));
        let annotation = self.annotation(annotation_class, vec![(key, value)]);
        self.class_annotations.push(annotation);
        self
    }

    pub fn with_int_member(mut self, annotation_class: &str, key: &str, value: i32) -> Self {
        let key = self.utf8(key);
        let value = Member::Int(self.integer(value));
        let annotation = self.annotation(annotation_class, vec![(key, value)]);
        self.class_annotations.push(annotation);
        self
    }

    pub fn with_string_array(mut self, annotation_class: &str, key: &str, values: &[&str]) -> Self {
        let key = self.utf8(key);
        let values = values.iter().map(|v| Member::String(self.utf8(v))).collect();
        let annotation = self.annotation(annotation_class, vec![(key, Member::Array(values))]);
        self.class_annotations.push(annotation);
        self
    }

    /// Store class annotations in `RuntimeInvisibleAnnotations` (CLASS retention)
    pub fn invisible(mut self) -> Self {
        self.class_attribute = "RuntimeInvisibleAnnotations";
        self
    }

    /// Abstract `void <method>()` carrying a `value`-style annotation
    pub fn method_named(mut self, method: &str, annotation_class: &str, value: &str) -> Self {
        let name_index = self.utf8(method);
        let descriptor_index = self.utf8("()V");
        let key = self.utf8("value");
        let value = Member::String(self.utf8(value));
        let annotation = self.annotation(annotation_class, vec![(key, value)]);
        self.methods.push((name_index, descriptor_index, annotation));
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        let attribute_name = self.utf8("RuntimeVisibleAnnotations");
        let class_attribute = self.class_attribute;
        let class_attribute_name = self.utf8(class_attribute);

        let mut out = Vec::new();
        out.extend_from_slice(&[0xCA, 0xFE, 0xBA, 0xBE]);
        put_u16(&mut out, 0);
        put_u16(&mut out, 52);

        put_u16(&mut out, self.pool.len() as u16 + 1);
        for entry in &self.pool {
            out.extend_from_slice(entry);
        }

        // public abstract super
        put_u16(&mut out, 0x0421);
        put_u16(&mut out, self.this_class);
        put_u16(&mut out, self.super_class);
        put_u16(&mut out, 0); // interfaces
        put_u16(&mut out, 0); // fields

        put_u16(&mut out, self.methods.len() as u16);
        for (name_index, descriptor_index, annotation) in &self.methods {
            put_u16(&mut out, 0x0401); // public abstract
            put_u16(&mut out, *name_index);
            put_u16(&mut out, *descriptor_index);
            put_u16(&mut out, 1);
            write_annotations_attribute(&mut out, attribute_name, std::slice::from_ref(annotation));
        }

        if self.class_annotations.is_empty() {
            put_u16(&mut out, 0);
        } else {
            put_u16(&mut out, 1);
            write_annotations_attribute(&mut out, class_attribute_name, &self.class_annotations);
        }
        out
    }

    fn annotation(&mut self, annotation_class: &str, members: Vec<(u16, Member)>) -> AnnotationBytes {
        let descriptor = format!("L{};", annotation_class.replace('.', "/"));
        AnnotationBytes {
            type_index: self.utf8(&descriptor),
            members,
        }
    }

    fn utf8(&mut self, value: &str) -> u16 {
        if let Some(index) = self.utf8_index.get(value) {
            return *index;
        }
        let mut entry = vec![1u8];
        put_u16(&mut entry, value.len() as u16);
        entry.extend_from_slice(value.as_bytes());
        let index = self.push(entry);
        self.utf8_index.insert(value.to_string(), index);
        index
    }

    fn class_ref(&mut self, name: &str) -> u16 {
        let name_index = self.utf8(name);
        let mut entry = vec![7u8];
        put_u16(&mut entry, name_index);
        self.push(entry)
    }

    fn integer(&mut self, value: i32) -> u16 {
        let mut entry = vec![3u8];
        entry.extend_from_slice(&value.to_be_bytes());
        self.push(entry)
    }

    fn push(&mut self, entry: Vec<u8>) -> u16 {
        self.pool.push(entry);
        self.pool.len() as u16
    }
}

fn write_annotations_attribute(out: &mut Vec<u8>, name_index: u16, annotations: &[AnnotationBytes]) {
    let mut body = Vec::new();
    put_u16(&mut body, annotations.len() as u16);
    for annotation in annotations {
        put_u16(&mut body, annotation.type_index);
        put_u16(&mut body, annotation.members.len() as u16);
        for (key, member) in &annotation.members {
            put_u16(&mut body, *key);
            write_member(&mut body, member);
        }
    }

    put_u16(out, name_index);
    out.extend_from_slice(&(body.len() as u32).to_be_bytes());
    out.extend_from_slice(&body);
}

fn write_member(body: &mut Vec<u8>, member: &Member) {
    match member {
        Member::String(index) => {
            body.push(b's');
            put_u16(body, *index);
        }
        Member::Int(index) => {
            body.push(b'I');
            put_u16(body, *index);
        }
        Member::Array(values) => {
            body.push(b'[');
            put_u16(body, values.len() as u16);
            for value in values {
                write_member(body, value);
            }
        }
    }
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

/// Lay classes out under `root` as `<name>.class`
#[allow(dead_code)]
pub fn write_classes(root: &Path, classes: Vec<(&str, Vec<u8>)>) {
    for (name, bytes) in classes {
        let path = root.join(format!("{name}.class"));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, bytes).unwrap();
    }
}

#[allow(dead_code)]
pub fn write_jar(path: &Path, classes: Vec<(&str, Vec<u8>)>) {
    let file = File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for (name, bytes) in classes {
        zip.start_file(format!("{name}.class"), options).unwrap();
        zip.write_all(&bytes).unwrap();
    }
    zip.finish().unwrap();
}
