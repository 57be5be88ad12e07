// FICHIER : insercao/src/form/schema.rs

//! Le questionnaire fixe « Formulário de Inserção Social — Quadriênio
//! 2021-2024 » : neuf sections, libellés portugais d'origine.
//! Déclaratif uniquement — la seule opération est `complete`, qui rend
//! totale la forme d'une réponse partielle (jamais de clés manquantes).

use crate::utils::data::{json, Map, Value};

/// Type de widget d'un champ. Porte la valeur de remplissage du widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Ligne de texte simple.
    Text,
    /// Zone de texte libre (réponses longues).
    LongText,
    /// Entier positif, avec sa valeur par défaut de widget.
    Number(i64),
    /// Case à cocher.
    Checkbox,
    /// Choix unique parmi des options fixes (la première est le défaut).
    Select(&'static [&'static str]),
}

impl FieldKind {
    /// Valeur de remplissage quand la section est répondue mais le champ
    /// laissé intact (sémantique du widget d'origine).
    pub fn placeholder(&self) -> Value {
        match self {
            FieldKind::Text | FieldKind::LongText => json!(""),
            FieldKind::Number(default) => json!(default),
            FieldKind::Checkbox => json!(false),
            FieldKind::Select(options) => json!(options.first().copied().unwrap_or("")),
        }
    }
}

/// Un champ : sa clé dans le Record, sa question affichée, son widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDef {
    /// Clé du champ dans le Record (ex.: "Sigla").
    pub label: &'static str,
    /// Question posée au répondant.
    pub prompt: &'static str,
    pub kind: FieldKind,
    /// Exemple affiché à côté de la question.
    pub hint: Option<&'static str>,
}

/// Une section du questionnaire.
/// Si `conditional` est vrai, le premier champ est la case déclencheuse :
/// décochée, les autres champs restent vides dans le Record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionDef {
    /// Clé de la section dans le Record (ex.: "Programa").
    pub name: &'static str,
    /// Titre affiché au répondant.
    pub title: &'static str,
    pub conditional: bool,
    pub fields: &'static [FieldDef],
}

impl SectionDef {
    /// La case déclencheuse, pour une section conditionnelle.
    pub fn gate(&self) -> Option<&'static FieldDef> {
        if self.conditional {
            self.fields.first()
        } else {
            None
        }
    }

    /// Les champs hors case déclencheuse.
    pub fn body(&self) -> &'static [FieldDef] {
        if self.conditional {
            &self.fields[1..]
        } else {
            self.fields
        }
    }
}

const fn text(label: &'static str, prompt: &'static str) -> FieldDef {
    FieldDef { label, prompt, kind: FieldKind::Text, hint: None }
}

const fn long(label: &'static str, prompt: &'static str) -> FieldDef {
    FieldDef { label, prompt, kind: FieldKind::LongText, hint: None }
}

const fn number(label: &'static str, prompt: &'static str, default: i64) -> FieldDef {
    FieldDef { label, prompt, kind: FieldKind::Number(default), hint: None }
}

const fn gate(label: &'static str, prompt: &'static str) -> FieldDef {
    FieldDef { label, prompt, kind: FieldKind::Checkbox, hint: None }
}

/// Le schéma complet, dans l'ordre de présentation.
pub const SCHEMA: &[SectionDef] = &[
    SectionDef {
        name: "Programa",
        title: "Seção 1: Dados do Programa e do Respondente",
        conditional: false,
        fields: &[
            FieldDef {
                label: "Sigla",
                prompt: "Sigla do Programa",
                kind: FieldKind::Text,
                hint: Some("Ex.: PPGPC"),
            },
            FieldDef {
                label: "Nome Completo",
                prompt: "Nome Completo do Programa",
                kind: FieldKind::Text,
                hint: Some("Ex.: Programa de Pós-Graduação em Psicologia Clínica"),
            },
            FieldDef {
                label: "Instituição",
                prompt: "Instituição",
                kind: FieldKind::Text,
                hint: Some("Ex.: Pontifícia Universidade Católica do Rio de Janeiro"),
            },
            FieldDef {
                label: "Modalidade",
                prompt: "Modalidade",
                kind: FieldKind::Select(&["Apenas Mestrado", "Mestrado e Doutorado"]),
                hint: None,
            },
            number(
                "Número médio de docentes (DP)",
                "Número médio de docentes (DP)",
                18,
            ),
        ],
    },
    SectionDef {
        name: "Cursos de Especialização",
        title: "A. Cursos de Especialização (Lato Sensu)",
        conditional: true,
        fields: &[
            gate(
                "Ofertou curso?",
                "Ofertou curso(s) de especialização (lato sensu) durante 2021-2024?",
            ),
            long(
                "Cursos",
                "Liste os nomes dos cursos de especialização ofertados durante o período.",
            ),
            long(
                "Descrição",
                "Descreva os objetivos, tópicos abordados e a metodologia de cada curso.",
            ),
            long(
                "Alunos",
                "Informe o número de alunos matriculados em cada curso (separar por vírgula se houver mais de um).",
            ),
            text("Duração", "Informe a duração dos cursos (em meses ou períodos)."),
            number("Docentes Envolvidos", "Número de docentes envolvidos", 0),
            long(
                "Impacto",
                "Descreva os principais resultados e impactos (ex.: desempenho, publicações, projetos de seguimento).",
            ),
        ],
    },
    SectionDef {
        name: "Cursos de Extensão",
        title: "B. Cursos de Extensão e Atividades de Divulgação",
        conditional: true,
        fields: &[
            gate(
                "Ministrou cursos/atividades?",
                "Ministrou cursos de extensão ou atividades de divulgação durante 2021-2024?",
            ),
            long(
                "Cursos/Atividades",
                "Liste os nomes e descreva brevemente os cursos de extensão/atividades de divulgação realizadas.",
            ),
            long(
                "Participantes",
                "Informe o número de participantes de cada atividade (separar por vírgula, se aplicável).",
            ),
            text("Duração", "Informe a duração de cada atividade (em meses ou períodos)."),
            number("Docentes Envolvidos", "Número de docentes envolvidos", 0),
            long(
                "Impacto",
                "Descreva os principais resultados ou impactos (ex.: capacitação, feedback da comunidade).",
            ),
        ],
    },
    SectionDef {
        name: "Consultorias",
        title: "C. Consultorias e Atividades de Assessoria",
        conditional: true,
        fields: &[
            gate(
                "Atuou em consultorias?",
                "Atuou em consultorias ou assessorias (sem emissão de relatórios formais) durante 2021-2024?",
            ),
            long(
                "Detalhes",
                "Detalhe o nome da agência/organização e a atividade realizada em cada consultoria.",
            ),
            text("Duração", "Informe a duração de cada consultoria (em meses)."),
            number("Docentes Envolvidos", "Número de docentes envolvidos", 0),
            long(
                "Impacto",
                "Descreva os resultados ou impactos (ex.: mudanças de política, capacitação).",
            ),
        ],
    },
    SectionDef {
        name: "Redes de Pesquisa",
        title: "D. Participação e Coordenação de Redes de Pesquisa",
        conditional: true,
        fields: &[
            gate(
                "Participou ou coordenou?",
                "Participou ou coordenou redes de pesquisa (nacionais/internacionais) durante 2021-2024?",
            ),
            long(
                "Redes",
                "Liste os nomes das redes ou consórcios de pesquisa que você participou ou coordenou.",
            ),
            long(
                "Papel",
                "Descreva seu papel em cada rede (ex.: participante, coordenador, assessor).",
            ),
            text("Duração", "Informe a duração da participação em cada rede."),
            long(
                "Resultados",
                "Liste os principais resultados colaborativos (ex.: publicações, eventos, propostas).",
            ),
        ],
    },
    SectionDef {
        name: "Eventos Científicos",
        title: "E. Organização e Participação em Eventos Científicos",
        conditional: true,
        fields: &[
            gate(
                "Organizou ou participou?",
                "Organizou ou participou de eventos científicos (congressos, simpósios, webinars) durante 2021-2024?",
            ),
            long("Eventos", "Informe o título e o tipo de cada evento realizado."),
            long(
                "Público",
                "Informe o número de participantes e descreva o público-alvo de cada evento.",
            ),
            text("Duração", "Informe a duração e a frequência dos eventos."),
            long(
                "Impacto",
                "Descreva os impactos ou resultados dos eventos (ex.: colaborações, cobertura de mídia).",
            ),
        ],
    },
    SectionDef {
        name: "Intervenções Comunitárias",
        title: "F. Intervenções para Populações Vulneráveis e Comunidades",
        conditional: true,
        fields: &[
            gate(
                "Implementou intervenções?",
                "Implementou intervenções ou projetos para comunidades vulneráveis durante 2021-2024?",
            ),
            long(
                "Intervenção",
                "Descreva a intervenção: qual comunidade foi atendida, objetivos e principais atividades.",
            ),
            number("Beneficiados", "Número de beneficiados", 0),
            text("Duração", "Informe a duração da intervenção (em meses)."),
            number("Docentes Envolvidos", "Número de docentes envolvidos", 0),
            long(
                "Métricas",
                "Descreva as métricas de avaliação utilizadas (ex.: feedback, indicadores de bem-estar).",
            ),
        ],
    },
    SectionDef {
        name: "Atividades em Escolas",
        title: "G. Atividades em Educação Básica (Escolas)",
        conditional: true,
        fields: &[
            gate(
                "Realizou atividades?",
                "Realizou atividades em escolas (públicas ou privadas) durante 2021-2024?",
            ),
            long(
                "Atividade",
                "Descreva a atividade realizada (ex.: palestras, workshops, sessões interativas) e o público-alvo (alunos, professores ou ambos).",
            ),
            number("Número de Sessões", "Número de sessões", 0),
            number("Participantes", "Número total de participantes", 0),
            text("Duração", "Informe a duração total das atividades (em meses ou períodos)."),
            long(
                "Avaliação",
                "Descreva como foi avaliado o impacto da atividade (ex.: feedback, mudanças no ambiente escolar).",
            ),
        ],
    },
    SectionDef {
        name: "Reflexões e Métricas Adicionais",
        title: "Seção 3: Reflexões Gerais e Métricas Adicionais",
        conditional: false,
        fields: &[
            long(
                "Reflexões",
                "Forneça comentários ou insights adicionais sobre desafios, sucessos e lições aprendidas durante o período.",
            ),
            long(
                "Impacto Total",
                "Informe dados agregados ou métricas quantitativas adicionais (ex.: total de eventos, matrículas, beneficiários).",
            ),
            long(
                "Recomendações",
                "Liste suas recomendações para melhorar o planejamento e a execução das ações futuras.",
            ),
        ],
    },
];

/// Les sections du questionnaire, dans l'ordre de présentation.
pub fn sections() -> &'static [SectionDef] {
    SCHEMA
}

/// Rend totale la forme d'une réponse : chaque section du schéma est
/// présente en sortie, chaque champ porte soit la valeur fournie, soit
/// sa valeur de remplissage. Une section conditionnelle déclinée garde
/// sa case à `false` et tous ses autres champs à `""` (sémantique du
/// formulaire d'origine, y compris pour les champs numériques).
pub fn complete(answers: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();

    for section in SCHEMA {
        let given = answers.get(section.name).and_then(Value::as_object);
        let mut fields = Map::new();

        match section.gate() {
            Some(gate_field) => {
                let checked = given
                    .and_then(|m| m.get(gate_field.label))
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                fields.insert(gate_field.label.to_string(), json!(checked));

                for field in section.body() {
                    let value = if checked {
                        given
                            .and_then(|m| m.get(field.label))
                            .cloned()
                            .unwrap_or_else(|| field.kind.placeholder())
                    } else {
                        json!("")
                    };
                    fields.insert(field.label.to_string(), value);
                }
            }
            None => {
                for field in section.fields {
                    let value = given
                        .and_then(|m| m.get(field.label))
                        .cloned()
                        .unwrap_or_else(|| field.kind.placeholder());
                    fields.insert(field.label.to_string(), value);
                }
            }
        }

        out.insert(section.name.to_string(), Value::Object(fields));
    }

    out
}
