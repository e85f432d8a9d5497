use crate::prelude::*;
use pest::Parser;
use pest_derive::Parser;
use std::{collections::HashMap, path::Path};

#[derive(Parser)]
#[grammar = "parsers/pegs/ini.pest"]
pub struct IniParser;

/// Section name to lowercased key to value. Keys before the first section
/// land in the `""` section.
pub type Ini = HashMap<String, HashMap<String, String>>;

pub fn parse_ini(content: &str) -> Result<Ini> {
    let _guard = stopwatch("ini parse");
    let file = IniParser::parse(Rule::file, content)?.next().ok_or_else(|| eyre!("empty ini"))?;
    let mut sections = Ini::new();
    let mut current_section = String::new();
    sections.entry(current_section.clone()).or_default();
    for line in file.into_inner() {
        match line.as_rule() {
            Rule::section => {
                let Some(name) = line.into_inner().next() else { continue };
                current_section = name.as_str().trim().to_string();
                sections.entry(current_section.clone()).or_default();
            }
            Rule::property => {
                let mut rules = line.into_inner();
                let (Some(name), Some(value)) = (rules.next(), rules.next()) else { continue };
                sections
                    .entry(current_section.clone())
                    .or_default()
                    .insert(name.as_str().to_lowercase(), value.as_str().trim().to_string());
            }
            _ => (),
        }
    }
    Ok(sections)
}

pub fn parse_ini_from_file(path: impl AsRef<Path>) -> Result<Ini> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).context(f!("can't read {path:?}"))?;
    parse_ini(&content).context(f!("can't parse {path:?}"))
}

#[cfg(test)]
mod tests {
    const INI: &str = r#"
    [default]
    region = eu-west-1

    [profile test]
    role_arn =arn:aws:iam::123123123:role/DescribeInstances
    source_profile = default
    region = eu-west-1

    [profile prod]
    # assumed from default
    role_arn = arn:aws:iam::123123123:role/DescribeInstances
    source_profile = default
    Region = eu-central-1   

"#;

    #[test]
    fn parse_ini_succeeds() {
        let res = super::parse_ini(INI);
        match res {
            Ok(r) => assert_eq!(r.len(), 4),
            Err(err) => panic!("{err:#}"),
        }
    }

    #[test]
    fn values_are_trimmed_and_keys_lowercased() {
        let ini = super::parse_ini(INI).unwrap();
        let test = &ini["profile test"];
        assert_eq!(test["role_arn"], "arn:aws:iam::123123123:role/DescribeInstances");
        assert_eq!(test["source_profile"], "default");
        assert_eq!(ini["profile prod"]["region"], "eu-central-1");
        assert!(ini[""].is_empty());
    }

    #[test]
    fn keys_before_any_section_and_empty_values() {
        let ini = super::parse_ini("output = json\n[default]\nregion =\n").unwrap();
        assert_eq!(ini[""]["output"], "json");
        assert_eq!(ini["default"]["region"], "");
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials");
        std::fs::write(&path, "[default]\naws_access_key_id = AKIA\n").unwrap();
        let ini = super::parse_ini_from_file(&path).unwrap();
        assert_eq!(ini["default"]["aws_access_key_id"], "AKIA");
        assert!(super::parse_ini_from_file(dir.path().join("missing")).is_err());
    }
}
