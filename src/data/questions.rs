// src/data/questions.rs

//! The vocational questionnaire: every question and its per-answer weights.

use crate::models::{
    category::Category::{
        Communication, Creativity, Design, Education, Logic, Management, Marketing, Technology,
    },
    question::{Answer, Question},
};

const VALUES: &str = "Valores Profissionais";
const INTERESTS: &str = "Interesses Profissionais";

pub static QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        section: VALUES,
        prompt: "O que mais te motiva em uma carreira?",
        answers: &[
            Answer {
                text: "Resolver problemas complexos e inovar",
                weights: &[(Technology, 3), (Logic, 2), (Creativity, 1)],
            },
            Answer {
                text: "Ajudar pessoas e fazer diferença na sociedade",
                weights: &[(Education, 3), (Communication, 2), (Management, 1)],
            },
            Answer {
                text: "Liderar equipes e tomar decisões estratégicas",
                weights: &[(Management, 3), (Communication, 2), (Marketing, 1)],
            },
            Answer {
                text: "Criar e expressar ideias artisticamente",
                weights: &[(Design, 3), (Creativity, 3), (Marketing, 1)],
            },
            Answer {
                text: "Trabalhar com dados e análises detalhadas",
                weights: &[(Logic, 3), (Technology, 2), (Management, 1)],
            },
        ],
    },
    Question {
        id: 2,
        section: VALUES,
        prompt: "Qual ambiente de trabalho você prefere?",
        answers: &[
            Answer {
                text: "Laboratório/escritório com tecnologia avançada",
                weights: &[(Technology, 3), (Logic, 2), (Design, 1)],
            },
            Answer {
                text: "Interação direta com pessoas e comunidade",
                weights: &[(Education, 3), (Communication, 3), (Marketing, 1)],
            },
            Answer {
                text: "Escritório corporativo com reuniões e apresentações",
                weights: &[(Management, 3), (Marketing, 2), (Communication, 2)],
            },
            Answer {
                text: "Estúdio criativo com liberdade de expressão",
                weights: &[(Design, 3), (Creativity, 3), (Marketing, 1)],
            },
            Answer {
                text: "Ambiente estruturado com processos bem definidos",
                weights: &[(Logic, 3), (Management, 2), (Technology, 1)],
            },
        ],
    },
    Question {
        id: 3,
        section: VALUES,
        prompt: "Qual é sua principal motivação no trabalho?",
        answers: &[
            Answer {
                text: "Autonomia e flexibilidade para inovar",
                weights: &[(Technology, 2), (Creativity, 3), (Design, 2)],
            },
            Answer {
                text: "Reconhecimento e impacto social do meu trabalho",
                weights: &[(Education, 3), (Communication, 2), (Marketing, 1)],
            },
            Answer {
                text: "Crescimento na carreira e liderança",
                weights: &[(Management, 3), (Marketing, 2), (Communication, 1)],
            },
            Answer {
                text: "Estabilidade e segurança financeira",
                weights: &[(Logic, 2), (Management, 2), (Technology, 2)],
            },
            Answer {
                text: "Desafios intelectuais constantes",
                weights: &[(Technology, 3), (Logic, 3), (Creativity, 1)],
            },
        ],
    },
    Question {
        id: 4,
        section: VALUES,
        prompt: "Como você define sucesso profissional?",
        answers: &[
            Answer {
                text: "Criar tecnologias que revolucionem o mundo",
                weights: &[(Technology, 3), (Logic, 2), (Creativity, 2)],
            },
            Answer {
                text: "Formar pessoas e transmitir conhecimento",
                weights: &[(Education, 3), (Communication, 3), (Management, 1)],
            },
            Answer {
                text: "Construir e liderar uma empresa de sucesso",
                weights: &[(Management, 3), (Marketing, 3), (Communication, 2)],
            },
            Answer {
                text: "Criar obras e designs reconhecidos mundialmente",
                weights: &[(Design, 3), (Creativity, 3), (Marketing, 2)],
            },
            Answer {
                text: "Dominar minha área técnica e ser referência",
                weights: &[(Technology, 2), (Logic, 3), (Education, 1)],
            },
        ],
    },
    Question {
        id: 5,
        section: VALUES,
        prompt: "Qual tipo de contribuição você quer deixar?",
        answers: &[
            Answer {
                text: "Soluções tecnológicas que facilitem a vida",
                weights: &[(Technology, 3), (Logic, 2), (Management, 1)],
            },
            Answer {
                text: "Pessoas mais capacitadas e desenvolvidas",
                weights: &[(Education, 3), (Communication, 2), (Management, 2)],
            },
            Answer {
                text: "Organizações mais eficientes e bem geridas",
                weights: &[(Management, 3), (Logic, 2), (Communication, 1)],
            },
            Answer {
                text: "Mundo mais belo e inspirador através do design",
                weights: &[(Design, 3), (Creativity, 3), (Marketing, 1)],
            },
            Answer {
                text: "Marcas e produtos conhecidos por milhões",
                weights: &[(Marketing, 3), (Communication, 2), (Design, 2)],
            },
        ],
    },
    Question {
        id: 6,
        section: INTERESTS,
        prompt: "Nas horas livres, você prefere:",
        answers: &[
            Answer {
                text: "Montar/desmontar equipamentos eletrônicos",
                weights: &[(Technology, 3), (Logic, 3), (Creativity, 1)],
            },
            Answer {
                text: "Participar de trabalhos voluntários e sociais",
                weights: &[(Education, 3), (Communication, 2), (Management, 1)],
            },
            Answer {
                text: "Organizar eventos ou liderar grupos de amigos",
                weights: &[(Management, 3), (Communication, 2), (Marketing, 2)],
            },
            Answer {
                text: "Desenhar, fotografar ou criar conteúdo visual",
                weights: &[(Design, 3), (Creativity, 3), (Marketing, 1)],
            },
            Answer {
                text: "Fazer planilhas ou organizar informações",
                weights: &[(Logic, 3), (Management, 2), (Technology, 1)],
            },
        ],
    },
    Question {
        id: 7,
        section: INTERESTS,
        prompt: "Qual tipo de desafio te anima mais?",
        answers: &[
            Answer {
                text: "Programar um aplicativo ou sistema complexo",
                weights: &[(Technology, 3), (Logic, 3), (Creativity, 1)],
            },
            Answer {
                text: "Ensinar algo novo e ver pessoas aprendendo",
                weights: &[(Education, 3), (Communication, 3), (Management, 1)],
            },
            Answer {
                text: "Convencer pessoas sobre uma ideia ou projeto",
                weights: &[(Marketing, 3), (Communication, 3), (Management, 2)],
            },
            Answer {
                text: "Criar uma campanha visual impactante",
                weights: &[(Design, 3), (Creativity, 3), (Marketing, 2)],
            },
            Answer {
                text: "Analisar dados para encontrar padrões ocultos",
                weights: &[(Logic, 3), (Technology, 2), (Management, 1)],
            },
        ],
    },
    Question {
        id: 8,
        section: INTERESTS,
        prompt: "Qual atividade você faria por horas sem se cansar?",
        answers: &[
            Answer {
                text: "Codificar e resolver bugs complexos",
                weights: &[(Technology, 3), (Logic, 3), (Creativity, 1)],
            },
            Answer {
                text: "Preparar aulas e materiais educativos",
                weights: &[(Education, 3), (Communication, 2), (Design, 1)],
            },
            Answer {
                text: "Planejar estratégias de marketing e vendas",
                weights: &[(Marketing, 3), (Management, 2), (Communication, 2)],
            },
            Answer {
                text: "Criar designs e experiências visuais",
                weights: &[(Design, 3), (Creativity, 3), (Technology, 1)],
            },
            Answer {
                text: "Analisar processos e otimizar operações",
                weights: &[(Logic, 3), (Management, 3), (Technology, 2)],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questionnaire_shape() {
        assert_eq!(QUESTIONS.len(), 8);
        for (i, q) in QUESTIONS.iter().enumerate() {
            assert_eq!(q.id as usize, i + 1);
            assert!((4..=5).contains(&q.answers.len()));
            for answer in q.answers {
                assert!(!answer.weights.is_empty());
                assert!(answer.weights.iter().all(|&(_, w)| (1..=3).contains(&w)));
            }
        }
    }
}
