// src/models/category.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Professional-affinity categories scored by the vocational quiz.
///
/// The set is closed. Declaration order is the fixed category order used
/// for result listings and for breaking ties between equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technology,
    Design,
    Marketing,
    Management,
    Education,
    Creativity,
    Communication,
    Logic,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Technology,
        Category::Design,
        Category::Marketing,
        Category::Management,
        Category::Education,
        Category::Creativity,
        Category::Communication,
        Category::Logic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Design => "design",
            Category::Marketing => "marketing",
            Category::Management => "management",
            Category::Education => "education",
            Category::Creativity => "creativity",
            Category::Communication => "communication",
            Category::Logic => "logic",
        }
    }

    /// Position in the fixed category order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label shown next to a score.
    pub fn label(self) -> &'static str {
        match self {
            Category::Technology => "Tecnologia",
            Category::Design => "Design",
            Category::Marketing => "Marketing",
            Category::Management => "Gestão",
            Category::Education => "Educação",
            Category::Creativity => "Criatividade",
            Category::Communication => "Comunicação",
            Category::Logic => "Lógica",
        }
    }

    /// Message describing someone whose dominant category is `self`.
    pub fn profile_message(self) -> &'static str {
        match self {
            Category::Technology => {
                "Você tem um perfil técnico e analítico! Adora resolver problemas usando lógica e criar soluções inovadoras."
            }
            Category::Design => {
                "Sua criatividade é seu diferencial! Você tem olhar estético apurado e gosta de trabalhar com elementos visuais."
            }
            Category::Marketing => {
                "Você é um comunicador nato! Tem facilidade para persuadir e entende como conectar pessoas a produtos/serviços."
            }
            Category::Management => {
                "Líder por natureza! Você tem facilidade para organizar, planejar e coordenar pessoas e projetos."
            }
            Category::Education => {
                "Ensinar é sua vocação! Você tem paciência e satisfação em transmitir conhecimento para outras pessoas."
            }
            Category::Creativity => {
                "Sua mente criativa é sua maior força! Você pensa fora da caixa e adora inovar."
            }
            Category::Communication => {
                "Comunicação é seu talento! Você se expressa bem e consegue convencer pessoas facilmente."
            }
            Category::Logic => {
                "Raciocínio lógico é seu forte! Você resolve problemas de forma sistemática e organizada."
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn serializes_as_snake_case_name() {
        let json = serde_json::to_string(&Category::Communication).unwrap();
        assert_eq!(json, "\"communication\"");
        let parsed: Category = serde_json::from_str("\"logic\"").unwrap();
        assert_eq!(parsed, Category::Logic);
    }
}
