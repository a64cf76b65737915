// In-memory research catalog browsed by the explore view and the
// dashboard's organism/paper tabs
use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{
    Condition, Experiment, ExperimentWithDetails, Organism, OrganismCategory, Paper,
};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    organisms: Vec<Organism>,
    papers: Vec<Paper>,
    conditions: Vec<Condition>,
    experiments: Vec<Experiment>,
}

impl Catalog {
    pub fn new(
        organisms: Vec<Organism>,
        papers: Vec<Paper>,
        conditions: Vec<Condition>,
        experiments: Vec<Experiment>,
    ) -> Self {
        Self {
            organisms,
            papers,
            conditions,
            experiments,
        }
    }

    /// Organisms matching `query` (all when blank), most-studied first
    pub fn organisms(&self, query: Option<&str>) -> Vec<Organism> {
        let needle = normalise(query);
        let mut found: Vec<Organism> = self
            .organisms
            .iter()
            .filter(|o| needle.as_deref().map_or(true, |n| o.matches(n)))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.experiment_count.cmp(&a.experiment_count));
        debug!("Catalog matched {} organisms for {:?}", found.len(), query);
        found
    }

    /// Papers whose title, authors or summary match `query` (all when blank)
    pub fn papers(&self, query: Option<&str>) -> Vec<Paper> {
        let needle = normalise(query);
        self.papers
            .iter()
            .filter(|p| needle.as_deref().map_or(true, |n| p.matches(n)))
            .cloned()
            .collect()
    }

    /// Experiments on an organism, joined to their papers
    ///
    /// With a non-empty selection only experiments sharing at least one
    /// selected condition are kept.
    pub fn experiments(&self, organism_id: &str, selected: &[String]) -> Vec<ExperimentWithDetails> {
        self.experiments
            .iter()
            .filter(|e| e.organism_id.as_deref() == Some(organism_id))
            .filter(|e| selected.is_empty() || selected.iter().any(|c| e.conditions.contains(c)))
            .filter_map(|e| {
                let paper_id = e.paper_id.as_deref()?;
                let paper = self.papers.iter().find(|p| p.id == paper_id)?;
                Some(ExperimentWithDetails {
                    experiment: e.clone(),
                    paper: paper.clone(),
                })
            })
            .collect()
    }

    /// Condition names, alphabetical
    pub fn condition_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.conditions.iter().map(|c| c.name.clone()).collect();
        names.sort();
        names
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Catalog preloaded with the reference organisms, papers and experiments
    pub fn seeded() -> Self {
        Self::new(seed_organisms(), seed_papers(), seed_conditions(), seed_experiments())
    }
}

fn normalise(query: Option<&str>) -> Option<String> {
    query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn organism(
    id: &str,
    name: &str,
    common_name: &str,
    scientific_name: &str,
    synonyms: &[&str],
    category: OrganismCategory,
    description: &str,
    experiment_count: u32,
) -> Organism {
    Organism {
        id: id.to_string(),
        name: name.to_string(),
        common_name: Some(common_name.to_string()),
        scientific_name: Some(scientific_name.to_string()),
        synonyms: strings(synonyms),
        category,
        description: Some(description.to_string()),
        image_url: None,
        experiment_count,
    }
}

fn seed_organisms() -> Vec<Organism> {
    vec![
        organism(
            "1",
            "Arabidopsis thaliana",
            "Thale cress",
            "Arabidopsis thaliana",
            &["Mouse-ear cress", "Thale cress"],
            OrganismCategory::Plant,
            "A small flowering plant native to Eurasia and Africa. Widely used as a model organism in plant biology and genetics research.",
            24,
        ),
        organism(
            "2",
            "Escherichia coli",
            "E. coli",
            "Escherichia coli",
            &["E. coli"],
            OrganismCategory::Microbe,
            "A gram-negative bacterium commonly found in the lower intestine of warm-blooded organisms. Extensively used in molecular biology research.",
            18,
        ),
        organism(
            "3",
            "Saccharomyces cerevisiae",
            "Baker's yeast",
            "Saccharomyces cerevisiae",
            &["Brewer's yeast", "Baker's yeast"],
            OrganismCategory::Microbe,
            "A species of yeast used in baking and brewing, and as a model organism in molecular and cell biology research.",
            15,
        ),
        organism(
            "4",
            "Human cell cultures",
            "Human cells",
            "Homo sapiens",
            &["Human cells", "Human tissue"],
            OrganismCategory::HumanCells,
            "Various human cell lines used to study the effects of space conditions on human physiology and cellular processes.",
            32,
        ),
        organism(
            "5",
            "Caenorhabditis elegans",
            "Roundworm",
            "Caenorhabditis elegans",
            &["C. elegans", "Nematode"],
            OrganismCategory::Animal,
            "A free-living transparent nematode widely used as a model organism for studying genetics, development, and neurobiology.",
            12,
        ),
        organism(
            "6",
            "Drosophila melanogaster",
            "Fruit fly",
            "Drosophila melanogaster",
            &["Fruit fly", "Vinegar fly"],
            OrganismCategory::Animal,
            "A species of fly widely used in biological research, particularly in genetics and developmental biology studies.",
            8,
        ),
    ]
}

fn seed_papers() -> Vec<Paper> {
    vec![
        Paper {
            id: "1".into(),
            title: "Effects of Microgravity on Arabidopsis Root Development and Gene Expression".into(),
            authors: strings(&["Smith, J.A.", "Johnson, M.B.", "Williams, C.D."]),
            publication_date: NaiveDate::from_ymd_opt(2023, 8, 15),
            journal: Some("Plant Space Biology Journal".into()),
            doi: Some("10.1234/psb.2023.001".into()),
            abstract_text: Some("This study investigates the impact of microgravity conditions on root development patterns and gene expression profiles in Arabidopsis thaliana.".into()),
            pdf_url: Some("https://example.com/paper1.pdf".into()),
            summary: Some("Microgravity significantly altered root gravitropism and affected expression of over 200 genes involved in cell wall modification and stress response pathways.".into()),
            key_findings: strings(&[
                "Root gravitropism was completely eliminated in microgravity conditions",
                "Cell wall-related genes showed 3-fold upregulation",
                "Stress response pathways were activated within 24 hours",
            ]),
        },
        Paper {
            id: "2".into(),
            title: "Radiation Tolerance Mechanisms in E. coli During Space Flight".into(),
            authors: strings(&["Anderson, K.L.", "Brown, T.M.", "Davis, R.N."]),
            publication_date: NaiveDate::from_ymd_opt(2023, 6, 20),
            journal: Some("Microbiology in Space".into()),
            doi: Some("10.1234/mis.2023.015".into()),
            abstract_text: Some("Investigation of DNA repair mechanisms and radiation tolerance in E. coli exposed to cosmic radiation during a 6-month ISS mission.".into()),
            pdf_url: Some("https://example.com/paper2.pdf".into()),
            summary: Some("E. coli demonstrated enhanced DNA repair capabilities and developed novel stress response mechanisms when exposed to cosmic radiation.".into()),
            key_findings: strings(&[
                "Enhanced expression of DNA repair genes by 400%",
                "Novel protein complexes formed for radiation protection",
                "Survival rates improved 50% compared to ground controls",
            ]),
        },
        Paper {
            id: "3".into(),
            title: "Cellular Metabolism Changes in Human Tissue Cultures in Microgravity".into(),
            authors: strings(&["Wilson, S.R.", "Martinez, A.C.", "Taylor, J.K."]),
            publication_date: NaiveDate::from_ymd_opt(2023, 9, 10),
            journal: Some("Human Space Medicine".into()),
            doi: Some("10.1234/hsm.2023.008".into()),
            abstract_text: Some("Comprehensive analysis of metabolic pathway alterations in human cell cultures exposed to simulated and actual microgravity conditions.".into()),
            pdf_url: Some("https://example.com/paper3.pdf".into()),
            summary: Some("Human cells showed significant metabolic reprogramming with increased glycolysis and altered mitochondrial function in microgravity.".into()),
            key_findings: strings(&[
                "Glycolytic flux increased by 60% in microgravity",
                "Mitochondrial respiration efficiency decreased by 25%",
                "Calcium signaling pathways were disrupted",
                "Cell cycle progression was delayed in G1/S transition",
            ]),
        },
    ]
}

fn seed_conditions() -> Vec<Condition> {
    let condition = |id: &str, name: &str, category: &str, description: &str| Condition {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: Some(description.to_string()),
    };

    vec![
        condition("1", "Microgravity", "gravity", "Reduced gravitational force environment"),
        condition("2", "Cosmic Radiation", "radiation", "Exposure to high-energy cosmic particles"),
        condition("3", "Temperature Variation", "temperature", "Extreme temperature fluctuations"),
        condition("4", "Vacuum Exposure", "atmosphere", "Exposure to space vacuum conditions"),
        condition("5", "Magnetic Field Changes", "magnetic", "Altered magnetic field environment"),
        condition("6", "Isolation Stress", "psychological", "Stress from isolation and confinement"),
    ]
}

fn seed_experiments() -> Vec<Experiment> {
    let metrics = |pairs: &[(&str, f64)]| -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    };

    vec![
        Experiment {
            id: "1".into(),
            paper_id: Some("1".into()),
            organism_id: Some("1".into()),
            conditions: strings(&["Microgravity", "Temperature Variation"]),
            duration_days: Some(30),
            key_results: Some("Significant changes in root development patterns with complete loss of gravitropism and altered gene expression profiles.".into()),
            metrics: metrics(&[("survival_rate", 95.0), ("growth_rate", 0.8)]),
        },
        Experiment {
            id: "2".into(),
            paper_id: Some("2".into()),
            organism_id: Some("2".into()),
            conditions: strings(&["Cosmic Radiation", "Microgravity"]),
            duration_days: Some(180),
            key_results: Some("Enhanced DNA repair mechanisms and improved radiation tolerance compared to ground controls.".into()),
            metrics: metrics(&[("survival_rate", 88.0), ("mutation_rate", 0.12)]),
        },
        Experiment {
            id: "3".into(),
            paper_id: Some("3".into()),
            organism_id: Some("4".into()),
            conditions: strings(&["Microgravity", "Magnetic Field Changes"]),
            duration_days: Some(14),
            key_results: Some("Metabolic reprogramming with increased glycolysis and altered mitochondrial function.".into()),
            metrics: metrics(&[("viability", 92.0), ("metabolic_activity", 1.6)]),
        },
    ]
}
