use plugin_scanner_api::{AnnotationId, AnnotationInfo, BoxError, ElementValue};
use ristretto_classfile::ConstantPool;
use ristretto_classfile::attributes::{Annotation, AnnotationElement};

pub struct AnnotationConverter;

impl AnnotationConverter {
    pub fn convert(pool: &ConstantPool, annotation: &Annotation) -> Result<AnnotationInfo, BoxError> {
        let descriptor = pool
            .try_get_utf8(annotation.type_index)
            .map_err(|e| format!("Failed to resolve annotation type: {e:?}"))?;

        let mut members = Vec::with_capacity(annotation.elements.len());
        for pair in &annotation.elements {
            let name = pool
                .try_get_utf8(pair.name_index)
                .map_err(|e| format!("Failed to resolve annotation member name: {e:?}"))?;
            members.push((name.to_string(), Self::convert_element(pool, &pair.value)?));
        }

        Ok(AnnotationInfo {
            id: AnnotationId::from_descriptor(descriptor.to_string()),
            members,
        })
    }

    pub fn convert_element(
        pool: &ConstantPool,
        element: &AnnotationElement,
    ) -> Result<ElementValue, BoxError> {
        let value = match element {
            AnnotationElement::String { const_value_index } => {
                ElementValue::String(Self::utf8(pool, *const_value_index)?)
            }
            AnnotationElement::Int { const_value_index } => {
                ElementValue::Int(Self::int(pool, *const_value_index)?)
            }
            AnnotationElement::Byte { const_value_index } => {
                ElementValue::Byte(Self::int(pool, *const_value_index)? as i8)
            }
            AnnotationElement::Short { const_value_index } => {
                ElementValue::Short(Self::int(pool, *const_value_index)? as i16)
            }
            AnnotationElement::Boolean { const_value_index } => {
                ElementValue::Boolean(Self::int(pool, *const_value_index)? != 0)
            }
            AnnotationElement::Char { const_value_index } => {
                let code = Self::int(pool, *const_value_index)?;
                let ch = char::from_u32(code as u32)
                    .ok_or_else(|| format!("Invalid char constant {code}"))?;
                ElementValue::Char(ch)
            }
            AnnotationElement::Long { const_value_index } => {
                let value = pool
                    .try_get_long(*const_value_index)
                    .map_err(|e| format!("Failed to resolve long constant: {e:?}"))?;
                ElementValue::Long(*value)
            }
            AnnotationElement::Float { const_value_index } => {
                let value = pool
                    .try_get_float(*const_value_index)
                    .map_err(|e| format!("Failed to resolve float constant: {e:?}"))?;
                ElementValue::Float(*value)
            }
            AnnotationElement::Double { const_value_index } => {
                let value = pool
                    .try_get_double(*const_value_index)
                    .map_err(|e| format!("Failed to resolve double constant: {e:?}"))?;
                ElementValue::Double(*value)
            }
            AnnotationElement::Enum {
                type_name_index,
                const_name_index,
            } => ElementValue::Enum {
                type_name: Self::utf8(pool, *type_name_index)?,
                const_name: Self::utf8(pool, *const_name_index)?,
            },
            AnnotationElement::Class { class_info_index } => {
                ElementValue::Class(Self::utf8(pool, *class_info_index)?)
            }
            AnnotationElement::Annotation { annotation } => {
                ElementValue::Annotation(Self::convert(pool, annotation)?)
            }
            AnnotationElement::Array { values } => ElementValue::Array(
                values
                    .iter()
                    .map(|v| Self::convert_element(pool, v))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        };
        Ok(value)
    }

    fn utf8(pool: &ConstantPool, index: u16) -> Result<String, BoxError> {
        let value = pool
            .try_get_utf8(index)
            .map_err(|e| format!("Failed to resolve utf8 constant #{index}: {e:?}"))?;
        Ok(value.to_string())
    }

    // byte, char, short, boolean and int members all share CONSTANT_Integer
    fn int(pool: &ConstantPool, index: u16) -> Result<i32, BoxError> {
        let value = pool
            .try_get_integer(index)
            .map_err(|e| format!("Failed to resolve integer constant #{index}: {e:?}"))?;
        Ok(*value)
    }
}
