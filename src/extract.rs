//! Parse a phpDocumentor `structure.xml` into the input model.

use crate::error::ExtractError;
use crate::model::Project;
use std::fs;
use std::path::Path;

/// Read and decode the structure file at `path`.
pub fn extract(path: &Path) -> Result<Project, ExtractError> {
    let content = fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|source| ExtractError::Xml {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode structure XML held in memory.
pub fn parse(xml: &str) -> Result<Project, quick_xml::DeError> {
    quick_xml::de::from_str(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRUCTURE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<project version="2.9.0" title="">
  <file path="src/Foo.php" hash="abc">
    <docblock line="0">
      <description></description>
      <long-description></long-description>
    </docblock>
    <class final="false" abstract="false" namespace="\NS" line="9">
      <extends>\NS\Base</extends>
      <implements>\NS\Contract</implements>
      <implements>\Countable</implements>
      <name>Foo</name>
      <full_name>\NS\Foo</full_name>
      <docblock line="5">
        <description>A foo.</description>
        <long-description>More about foo.</long-description>
        <tag name="deprecated" description="use Bar"/>
      </docblock>
      <constant namespace="\NS" line="11" visibility="public">
        <name>LIMIT</name>
        <full_name>\NS\Foo::LIMIT</full_name>
        <value>10</value>
      </constant>
      <property namespace="\NS" line="12" visibility="private">
        <name>$count</name>
        <full_name>\NS\Foo::$count</full_name>
        <default>0</default>
        <docblock line="12">
          <description>How many.</description>
          <long-description/>
          <tag name="var" line="12" description="" type="int" variable=""><type>int</type></tag>
        </docblock>
      </property>
      <method final="false" abstract="false" static="false" visibility="public" namespace="\NS" line="20">
        <name>bar</name>
        <full_name>\NS\Foo::bar()</full_name>
        <value></value>
        <argument line="20" by_reference="false">
          <name>$x</name>
          <default></default>
          <type>int</type>
        </argument>
        <docblock line="15">
          <description>Bar it.</description>
          <long-description></long-description>
          <tag name="param" line="15" description="the x" type="int" variable="$x"><type>int</type></tag>
        </docblock>
      </method>
      <constant namespace="\NS" line="30" visibility="public">
        <name>OTHER</name>
        <full_name>\NS\Base::OTHER</full_name>
        <value>'o'</value>
        <inherited_from>\NS\Base</inherited_from>
      </constant>
    </class>
  </file>
  <file path="src/functions.php" hash="def">
    <function namespace="\NS" line="3">
      <name>helper</name>
      <full_name>\NS\helper()</full_name>
    </function>
  </file>
  <namespace name="NS" full_name="\NS"/>
</project>
"#;

    #[test]
    fn parses_files_in_order() {
        let project = parse(STRUCTURE).unwrap();
        assert_eq!(project.files.len(), 2);
        assert_eq!(project.files[0].path, "src/Foo.php");
        assert_eq!(project.files[1].path, "src/functions.php");
        assert!(project.files[1].class.is_none());
        assert_eq!(project.files[1].functions.len(), 1);
        assert_eq!(project.files[1].functions[0].full_name, "\\NS\\helper()");
    }

    #[test]
    fn parses_class_header() {
        let project = parse(STRUCTURE).unwrap();
        let class = project.files[0].class.as_ref().unwrap();
        assert_eq!(class.name, "Foo");
        assert_eq!(class.full_name, "\\NS\\Foo");
        assert_eq!(class.implements, vec!["\\NS\\Contract", "\\Countable"]);
        assert_eq!(class.docblock.summary(), "A foo.\n\nMore about foo.");
        assert_eq!(class.docblock.status(), "deprecated");
    }

    #[test]
    fn parses_interleaved_members() {
        let project = parse(STRUCTURE).unwrap();
        let class = project.files[0].class.as_ref().unwrap();
        assert_eq!(class.constants.len(), 2);
        assert_eq!(class.constants[0].value, "10");
        assert!(!class.constants[0].is_inherited());
        assert!(class.constants[1].is_inherited());
        assert_eq!(class.properties.len(), 1);
        assert_eq!(
            class.properties[0].docblock.first_tag().unwrap().type_name,
            "int"
        );
    }

    #[test]
    fn parses_method_arguments() {
        let project = parse(STRUCTURE).unwrap();
        let method = &project.files[0].class.as_ref().unwrap().methods[0];
        assert_eq!(method.name, "bar");
        assert_eq!(method.arguments.len(), 1);
        assert_eq!(method.arguments[0].name, "$x");
        assert_eq!(method.arguments[0].type_name, "int");
        assert_eq!(method.docblock.param("$x"), "the x");
    }

    #[test]
    fn missing_docblock_is_empty() {
        let xml = r#"<project><file path="a.php"><trait><name>T</name><full_name>\NS\T</full_name></trait></file></project>"#;
        let project = parse(xml).unwrap();
        let t = project.files[0].trait_decl.as_ref().unwrap();
        assert_eq!(t.docblock.summary(), "");
        assert!(t.methods.is_empty());
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(parse("<project><file path=\"a\"></project>").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = extract(Path::new("/nonexistent/structure.xml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/structure.xml"));
    }
}
