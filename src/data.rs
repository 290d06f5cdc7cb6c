//! The site's page records
//!
//! This module is the authoring surface: editing these tables is how pages
//! are added or changed. Order here is output order.

use crate::record::{Link, PageGroup, PageRecord};

/// Both record groups, in generation order.
pub const GROUPS: &[PageGroup] = &[
    PageGroup {
        name: "project",
        crumb_label: "Projects",
        crumb_href: "projects/index.html",
        back_label: "Back to Projects",
        back_href: "projects/index.html",
        records: PROJECTS,
    },
    PageGroup {
        name: "portfolio",
        crumb_label: "Portfolio",
        crumb_href: "portfolio.html",
        back_label: "Back to Portfolio",
        back_href: "portfolio.html",
        records: PORTFOLIO,
    },
];

pub const PROJECTS: &[PageRecord] = &[
    PageRecord {
        file: "project-1.html",
        title: "ARTH VR Learning Environment | Amir Goli",
        description: "Adaptive Reuse Thinking for Housing: a VR learning environment for adaptive reuse design tasks.",
        crumb: "ARTH VR learning environment",
        heading: "ARTH VR learning environment",
        summary: "A Unity-based VR learning environment where learners explore an old factory and develop adaptive reuse designs for housing, supported by interaction modes and a structured user study workflow.",
        badges: "<span class=\"badge\">VR</span> <span class=\"badge\">Education</span> <span class=\"badge\">Unity</span>",
        overview: "This project focuses on turning an adaptive reuse design task into an immersive VR experience. The environment supports exploratory learning, design iteration, and data collection for usability and engagement analysis.",
        role: "VR developer and researcher. Built interactions, content structure, and study-ready instrumentation for evaluation.",
        tools: &["Unity", "C#", "XR interaction patterns", "Quest headset deployment"],
        outcomes: &[
            "VR prototype that supports an adaptive reuse scenario from initial exploration to design decisions",
            "Reusable interaction patterns for placement, editing, and mode switching",
            "Foundation for usability and engagement measurement",
        ],
        links: &[
            Link { label: "Related paper", href: "publications.html" },
            Link { label: "Portfolio entry", href: "portfolio.html" },
        ],
    },
    PageRecord {
        file: "project-2.html",
        title: "Architectural Design Serious Game | Amir Goli",
        description: "A multimodal serious game for architectural education using Leap Motion, machine vision, and a voice assistant.",
        crumb: "Architectural design serious game",
        heading: "Architectural design serious game",
        summary: "A serious game approach that integrates multiple interaction modalities to support teaching and learning in architectural design.",
        badges: "<span class=\"badge\">Serious games</span> <span class=\"badge\">HCI</span> <span class=\"badge\">Multimodal</span>",
        overview: "The project explores how multimodal interaction can make design learning more engaging. The system connects gesture input, machine vision cues, and voice interaction to support tasks inside a CAD-like workflow.",
        role: "System designer and developer. Integrated interaction components and designed the learning flow.",
        tools: &[
            "Leap Motion",
            "Computer vision pipeline",
            "Voice assistant integration",
            "CAD workflow prototyping",
        ],
        outcomes: &[
            "Working multimodal prototype for design learning",
            "Empirical grounding through a peer reviewed journal article",
            "Clear interaction mapping for future classroom deployment",
        ],
        links: &[Link {
            label: "Paper (Education and Information Technologies)",
            href: "https://doi.org/10.1007/s10639-022-11062-z",
        }],
    },
    PageRecord {
        file: "project-3.html",
        title: "Parametric Topology Optimization | Amir Goli",
        description: "Parametric structural topology optimization of high-rise buildings considering wind and gravity loads.",
        crumb: "Parametric topology optimization",
        heading: "Parametric topology optimization",
        summary: "A performance-driven workflow combining parametric modeling with topology optimization (BESO) for high-rise structural design under wind and gravity loads.",
        badges: "<span class=\"badge\">Optimization</span> <span class=\"badge\">Structures</span> <span class=\"badge\">Parametric</span>",
        overview: "The goal is to explore structural systems efficiently by linking parametric inputs to an optimization loop. Wind and gravity loads guide material distribution and structural form exploration.",
        role: "Workflow builder and analyst. Supported modeling, optimization setup, and result interpretation.",
        tools: &[
            "Rhinoceros + Grasshopper",
            "Optimization workflow (BESO)",
            "Structural modeling",
        ],
        outcomes: &[
            "End-to-end pipeline from parametric inputs to optimized structural topology",
            "Publication in Journal of Architectural Engineering",
            "Transferable approach for early-stage structural exploration",
        ],
        links: &[Link {
            label: "Paper (Journal of Architectural Engineering)",
            href: "https://doi.org/10.1061/(asce)ae.1943-5568.0000511",
        }],
    },
    PageRecord {
        file: "project-4.html",
        title: "Climate Responsive Facade Prototype | Amir Goli",
        description: "A climate-responsive facade concept inspired by the chameleon eye.",
        crumb: "Climate responsive facade prototype",
        heading: "Climate responsive facade prototype",
        summary: "A biomimicry-inspired facade prototype that adapts to climate conditions, informed by sun path analysis and simulation-driven design iterations.",
        badges: "<span class=\"badge\">Sustainability</span> <span class=\"badge\">Simulation</span> <span class=\"badge\">Biomimicry</span>",
        overview: "This project studies how responsive facade behavior can improve comfort and performance. The concept uses a chameleon eye as inspiration and links motion patterns to environmental inputs.",
        role: "Designer and computational modeler. Developed form logic, ran simulations, and iterated the prototype.",
        tools: &["Grasshopper", "Environmental simulation", "Parametric iteration"],
        outcomes: &[
            "Prototype facade logic aligned with climate inputs",
            "Demonstration of simulation-supported iteration",
            "A clear concept narrative suitable for portfolio presentation",
        ],
        links: &[Link {
            label: "Portfolio entry",
            href: "portfolio.html",
        }],
    },
    PageRecord {
        file: "project-5.html",
        title: "WS-Snake Grasshopper Tool | Amir Goli",
        description: "WS-Snake: a Grasshopper tool for wind pressure calculations on tall building facades.",
        crumb: "WS-Snake Grasshopper tool",
        heading: "WS-Snake Grasshopper tool",
        summary: "A Grasshopper-based tool that estimates facade wind pressures based on height and orientation to support early-stage facade design decisions.",
        badges: "<span class=\"badge\">Grasshopper</span> <span class=\"badge\">Wind</span> <span class=\"badge\">Automation</span>",
        overview: "The tool targets fast feedback for facade design by turning wind considerations into accessible parametric outputs. It helps designers check pressures and compare options without slowing down concept work.",
        role: "Tool developer. Designed the workflow and packaged it for reuse.",
        tools: &["Grasshopper", "Wind pressure logic", "Parametric interfaces"],
        outcomes: &[
            "Reusable GH tool that automates wind pressure estimation",
            "A workflow that supports teaching and practice-oriented exploration",
            "Improved speed in early-stage facade evaluation",
        ],
        links: &[Link {
            label: "Demo placeholder",
            href: "#",
        }],
    },
    PageRecord {
        file: "project-6.html",
        title: "Curtain Wall Automation Pipeline | Amir Goli",
        description: "Rule-based curtain wall geometry + automated shop drawings and takeoffs (Rhino, Grasshopper, Python).",
        crumb: "Curtain wall automation pipeline",
        heading: "Curtain wall automation pipeline",
        summary: "A workflow that generates curtain wall geometry and automates documentation outputs such as shop drawings and material takeoffs.",
        badges: "<span class=\"badge\">Automation</span> <span class=\"badge\">Documentation</span> <span class=\"badge\">Python</span>",
        overview: "This project bridges design and construction documentation by using rule-based parametric modeling to standardize curtain wall generation and downstream drawing outputs.",
        role: "Workflow designer. Coordinated geometry rules and supported automated outputs.",
        tools: &[
            "Rhinoceros + Grasshopper",
            "Python scripting",
            "Documentation templates",
        ],
        outcomes: &[
            "More consistent curtain wall generation across design variations",
            "Reduced time spent on repetitive documentation tasks",
            "Clear pipeline structure that can be extended to other facade systems",
        ],
        links: &[Link {
            label: "Portfolio entry",
            href: "portfolio.html",
        }],
    },
];

pub const PORTFOLIO: &[PageRecord] = &[
    PageRecord {
        file: "portfolio-1.html",
        title: "Portfolio | VR Demo Reel | Amir Goli",
        description: "Portfolio mock page: VR demo reel.",
        crumb: "VR demo reel",
        heading: "VR demo reel",
        summary: "A placeholder page for a short demo reel of VR projects (screen recording + captions + links).",
        badges: "<span class=\"badge\">Portfolio</span> <span class=\"badge\">VR</span>",
        overview: "Replace the placeholder image with a still from your video. Add a short paragraph describing the scenario, interactions, and what you learned.",
        role: "Creator and editor. Capture, script, and narrate the demo in under 90 seconds.",
        tools: &["Unity capture", "Video editing", "Captioning"],
        outcomes: &[
            "A concise artifact that communicates your work quickly",
            "Direct links to related papers or repositories",
            "Clear story: context, contribution, result",
        ],
        links: &[Link {
            label: "Back to Portfolio",
            href: "portfolio.html",
        }],
    },
    PageRecord {
        file: "portfolio-2.html",
        title: "Portfolio | Research Figures | Amir Goli",
        description: "Portfolio mock page: research figures and diagrams.",
        crumb: "Research figures",
        heading: "Research figures",
        summary: "A placeholder page to showcase figures and diagrams from papers, proposals, and posters.",
        badges: "<span class=\"badge\">Portfolio</span> <span class=\"badge\">Research</span>",
        overview: "Add 3 to 5 key figures (with captions) that show your contribution: study design, interface, pipeline, or results.",
        role: "Designer and author. Focus on clarity, typography, and consistent visual language.",
        tools: &["Illustration tools", "InDesign", "PowerPoint"],
        outcomes: &[
            "Recruiters and committees see your thinking, not just final visuals",
            "Reusable visuals for talks and proposals",
            "A fast way to communicate scope and rigor",
        ],
        links: &[Link {
            label: "Back to Portfolio",
            href: "portfolio.html",
        }],
    },
    PageRecord {
        file: "portfolio-3.html",
        title: "Portfolio | Fabrication Work | Amir Goli",
        description: "Portfolio mock page: digital fabrication.",
        crumb: "Fabrication work",
        heading: "Fabrication work",
        summary: "A placeholder page for fabrication projects (laser cutting, CNC, 3D printing) with process photos.",
        badges: "<span class=\"badge\">Portfolio</span> <span class=\"badge\">Fabrication</span>",
        overview: "Show the pipeline from digital model to machine setup to final assembly. Include constraints and what you optimized.",
        role: "Fabrication lead. Document planning, toolpaths, iterations, and assembly steps.",
        tools: &["Laser cutter", "CNC", "3D printing"],
        outcomes: &[
            "Evidence of hands-on making and troubleshooting",
            "Clear link between computation and material outcomes",
            "Strong visual story for a portfolio",
        ],
        links: &[Link {
            label: "Back to Portfolio",
            href: "portfolio.html",
        }],
    },
    PageRecord {
        file: "portfolio-4.html",
        title: "Portfolio | Computational Design | Amir Goli",
        description: "Portfolio mock page: computational design workflows.",
        crumb: "Computational design",
        heading: "Computational design",
        summary: "A placeholder page to present parametric workflows, custom tools, and analysis-driven design.",
        badges: "<span class=\"badge\">Portfolio</span> <span class=\"badge\">Grasshopper</span>",
        overview: "Add screenshots of definitions, inputs and outputs, and one final render. Explain the rule set and what it enables.",
        role: "Tool builder and designer. Prioritize reproducibility and clear parameterization.",
        tools: &["Rhino", "Grasshopper", "Python"],
        outcomes: &[
            "Demonstrates logic and rigor",
            "Shows how you turn goals into workflows",
            "Makes it easier for others to understand and reuse your methods",
        ],
        links: &[Link {
            label: "Back to Portfolio",
            href: "portfolio.html",
        }],
    },
    PageRecord {
        file: "portfolio-5.html",
        title: "Portfolio | Teaching Artifacts | Amir Goli",
        description: "Portfolio mock page: teaching materials.",
        crumb: "Teaching artifacts",
        heading: "Teaching artifacts",
        summary: "A placeholder page for teaching materials: assignment briefs, rubrics, and example feedback.",
        badges: "<span class=\"badge\">Portfolio</span> <span class=\"badge\">Teaching</span>",
        overview: "Include one short assignment, a rubric, and 2 to 3 examples of constructive feedback. Keep it concise.",
        role: "Instructor or TA. Focus on learning outcomes and assessment clarity.",
        tools: &["Rubric design", "Slides", "Learning platforms"],
        outcomes: &[
            "Evidence of communication and mentoring",
            "Reusable teaching toolkit",
            "Clear alignment between goals and evaluation",
        ],
        links: &[Link {
            label: "Back to Portfolio",
            href: "portfolio.html",
        }],
    },
    PageRecord {
        file: "portfolio-6.html",
        title: "Portfolio | Writing Samples | Amir Goli",
        description: "Portfolio mock page: writing samples.",
        crumb: "Writing samples",
        heading: "Writing samples",
        summary: "A placeholder page that links to a short research statement, proposal excerpt, or manuscript section.",
        badges: "<span class=\"badge\">Portfolio</span> <span class=\"badge\">Writing</span>",
        overview: "Provide one page per writing sample. Use clear headings and include links to published versions when possible.",
        role: "Author. Keep the sample focused and self-contained.",
        tools: &["Word or LaTeX", "Reference management"],
        outcomes: &[
            "Shows your thinking and framing",
            "Supports scholarship and funding applications",
            "Complements visual work with narrative clarity",
        ],
        links: &[Link {
            label: "Back to Portfolio",
            href: "portfolio.html",
        }],
    },
];
