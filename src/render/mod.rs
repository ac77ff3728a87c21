//! Renderer module: numpydoc text from the parsed model.

pub mod class;
pub mod function;
pub mod wrap;

pub use class::render_class;
pub use function::{render_function, Target};

const OVERLOAD_NOTICE: &str = "This {kind} was overloaded in the C-based source. To overcome \
this we will put the relevant docstring for each version below. Each version will begin \
with a line of # characters.";

/// Combine the renderings of every overload of one name.
///
/// A single rendering is returned unchanged; several are prefixed with an
/// overload notice and separated by a banner of `#` characters. `None` when
/// there is nothing to combine.
pub fn join_overloads(rendered: Vec<String>, target: Target) -> Option<String> {
    match rendered.len() {
        0 => None,
        1 => rendered.into_iter().next(),
        _ => {
            let (kind, separator) = match target {
                Target::Method => ("method", format!("{}\n\n", "#".repeat(64))),
                Target::Function => ("function", format!("\n\n{}\n\n", "#".repeat(72))),
            };
            let notice = target.wrapper().fill(&OVERLOAD_NOTICE.replace("{kind}", kind));
            Some(format!("{}\n\n{}", notice, rendered.join(&separator)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_join() {
        assert_eq!(join_overloads(Vec::new(), Target::Method), None);
    }

    #[test]
    fn single_rendering_passes_through() {
        let joined = join_overloads(vec!["one\n".to_string()], Target::Function);
        assert_eq!(joined.as_deref(), Some("one\n"));
    }

    #[test]
    fn method_overloads_get_notice_and_banner() {
        let joined = join_overloads(vec!["a\n".into(), "b\n".into()], Target::Method).unwrap();
        assert!(joined.starts_with("This method was overloaded"));
        assert!(joined.ends_with(&format!("a\n{}\n\nb\n", "#".repeat(64))));
        assert!(joined.lines().all(|l| l.len() <= 64));
    }

    #[test]
    fn function_overloads_use_wider_banner() {
        let joined = join_overloads(vec!["a".into(), "b".into()], Target::Function).unwrap();
        assert!(joined.starts_with("This function was overloaded"));
        assert!(joined.ends_with(&format!("a\n\n{}\n\nb", "#".repeat(72))));
    }
}
