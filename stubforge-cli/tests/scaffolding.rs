//! End-to-end tests for the scaffolding commands

use std::fs;
use std::path::PathBuf;

use stubforge_cli_lib::commands::{self, run, Session};
use stubforge_cli_lib::testing::ScriptedPrompter;
use stubforge_cli_lib::{
    LocalFilesystem, MakeComponentCommand, MakePageComponentCommand, ScaffoldError, StubLoader,
    StubsCommand,
};
use tempfile::TempDir;

fn session(root: &TempDir, prompter: ScriptedPrompter) -> Session<ScriptedPrompter, LocalFilesystem> {
    Session::new(prompter, LocalFilesystem, StubLoader::new(None), root.path())
}

fn read(root: &TempDir, path: &str) -> String {
    fs::read_to_string(root.path().join(path)).unwrap()
}

fn files_in(root: &TempDir, dir: &str) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(root.path().join(dir))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_component_without_props() {
    let temp_dir = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::new().with_confirm(false).with_confirm(true);
    let mut session = session(&temp_dir, prompter);

    let code = commands::execute(&MakeComponentCommand::new("widgets/InfoCard"), &mut session);

    assert_eq!(code, 0);
    assert_eq!(
        files_in(&temp_dir, "widgets/InfoCard"),
        ["InfoCard.spec.js", "InfoCard.stories.js", "InfoCard.vue"]
    );

    for file in ["InfoCard.vue", "InfoCard.spec.js", "InfoCard.stories.js"] {
        let content = read(&temp_dir, &format!("widgets/InfoCard/{file}"));
        assert!(content.contains("InfoCard"), "{file} is missing the pascal name");
        assert!(content.contains("infoCard"), "{file} is missing the camel name");
        assert!(content.contains("info-card"), "{file} is missing the kebab name");
    }
    assert!(read(&temp_dir, "widgets/InfoCard/InfoCard.vue").contains("'../../assets/scss/variables'"));
    assert!(read(&temp_dir, "widgets/InfoCard/InfoCard.spec.js").contains("'../../tests/mocks'"));

    let prompter = session.prompter();
    assert_eq!(
        prompter.questions(),
        ["Would you like to define props?", "Is this correct?"]
    );
    assert!(prompter.infos().contains(&"Scaffolding component at: widgets/InfoCard".to_string()));
    assert_eq!(
        prompter.successes(),
        ["InfoCard scaffolding created successfully at [widgets/InfoCard]."]
    );
}

#[test]
fn test_component_with_number_prop() {
    let temp_dir = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::new()
        .with_confirm(true)
        .with_input("count")
        .with_select(&[1])
        .with_confirm(false)
        .with_confirm(true);
    let mut session = session(&temp_dir, prompter);

    let scaffolded = run(&MakeComponentCommand::new("widgets/Counter"), &mut session).unwrap();
    assert_eq!(scaffolded.request.properties().len(), 1);
    assert_eq!(scaffolded.files.len(), 3);

    let vue = read(&temp_dir, "widgets/Counter/Counter.vue");
    assert!(vue.contains("count: {"));
    assert!(vue.contains("type: [Number],"));
    assert!(vue.contains("default: null,"));

    assert!(read(&temp_dir, "widgets/Counter/Counter.spec.js").contains("count: 1,"));
    assert!(read(&temp_dir, "widgets/Counter/Counter.stories.js").contains("count: 1,"));

    assert!(session.prompter().infos().contains(&"count: [Number]".to_string()));
    assert!(session.prompter().is_exhausted());
}

#[test]
fn test_invalid_prop_answers_are_asked_again() {
    let temp_dir = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::new()
        .with_confirm(true)
        .with_input("")
        .with_input("Label")
        .with_input("label")
        .with_select(&[])
        .with_select(&[0, 3])
        .with_confirm(true)
        .with_input("label")
        .with_input("items")
        .with_select(&[4])
        .with_confirm(false)
        .with_confirm(true);
    let mut session = session(&temp_dir, prompter);

    let scaffolded = run(&MakeComponentCommand::new("Tag"), &mut session).unwrap();

    let names: Vec<_> = scaffolded
        .request
        .properties()
        .iter()
        .map(|prop| prop.name.as_str())
        .collect();
    assert_eq!(names, ["label", "items"]);
    assert_eq!(
        session.prompter().errors(),
        [
            "Please provide a name",
            "Name must be camelcase",
            "Please select one or more types",
            "Prop already defined",
        ]
    );

    let vue = read(&temp_dir, "Tag/Tag.vue");
    assert!(vue.contains("type: [String, Object],"));
    assert!(vue.contains("default: '',"));
    assert!(vue.contains("default: () => ([]),"));
    assert!(read(&temp_dir, "Tag/Tag.spec.js").contains("'../tests/mocks'"));
}

#[test]
fn test_page_component_with_async_data() {
    let temp_dir = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::new().with_confirm(true).with_confirm(true);
    let mut session = session(&temp_dir, prompter);

    let code = commands::execute(&MakePageComponentCommand::new("pages/Profile"), &mut session);

    assert_eq!(code, 0);
    let vue = read(&temp_dir, "pages/Profile/Profile.vue");
    assert!(vue.contains("async asyncData()"));
    assert!(vue.contains("'../../assets/scss/variables'"));
    assert!(read(&temp_dir, "pages/Profile/Profile.spec.js").contains("'../../tests/mocks'"));
    assert!(read(&temp_dir, "pages/Profile/Profile.stories.js").contains("title: 'Pages/Profile'"));

    assert_eq!(session.prompter().questions(), ["Mock asyncData?", "Is this correct?"]);
    assert!(session.prompter().infos().contains(&"Mock asyncData: true".to_string()));
}

#[test]
fn test_page_component_without_async_data() {
    let temp_dir = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::new().with_confirm(false).with_confirm(true);
    let mut session = session(&temp_dir, prompter);

    run(&MakePageComponentCommand::new("Profile/"), &mut session).unwrap();

    assert!(!read(&temp_dir, "Profile/Profile.vue").contains("asyncData"));
    assert!(read(&temp_dir, "Profile/Profile.vue").contains("'../assets/scss/variables'"));
}

#[test]
fn test_existing_component_is_refused_before_questions() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("widgets/InfoCard")).unwrap();
    fs::write(temp_dir.path().join("widgets/InfoCard/InfoCard.vue"), "keep me").unwrap();
    let mut session = session(&temp_dir, ScriptedPrompter::new());

    let code = commands::execute(&MakeComponentCommand::new("widgets/InfoCard"), &mut session);

    assert_eq!(code, 1);
    assert!(session.prompter().questions().is_empty());
    assert_eq!(
        session.prompter().errors(),
        ["InfoCard already exists at [widgets/InfoCard]."]
    );
    assert_eq!(read(&temp_dir, "widgets/InfoCard/InfoCard.vue"), "keep me");
    assert_eq!(files_in(&temp_dir, "widgets/InfoCard"), ["InfoCard.vue"]);
}

#[test]
fn test_existing_page_is_refused_before_questions() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("pages/Profile")).unwrap();
    fs::write(temp_dir.path().join("pages/Profile/Profile.vue"), "keep me").unwrap();
    let mut session = session(&temp_dir, ScriptedPrompter::new());

    let err = run(&MakePageComponentCommand::new("pages/Profile/"), &mut session).unwrap_err();

    assert!(matches!(
        err,
        ScaffoldError::AlreadyExists { ref component, ref path }
            if component == "Profile" && path == "pages/Profile"
    ));
    assert!(session.prompter().questions().is_empty());
    assert_eq!(read(&temp_dir, "pages/Profile/Profile.vue"), "keep me");
    assert_eq!(files_in(&temp_dir, "pages/Profile"), ["Profile.vue"]);
    assert_eq!(session.report_error(&err), 1);
}

#[test]
fn test_acronym_component_names() {
    let temp_dir = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::new().with_confirm(false).with_confirm(true);
    let mut session = session(&temp_dir, prompter);

    run(&MakeComponentCommand::new("viewers/HTMLViewer"), &mut session).unwrap();

    let vue = read(&temp_dir, "viewers/HTMLViewer/HTMLViewer.vue");
    assert!(vue.contains("name: 'HTMLViewer'"));
    assert!(vue.contains("ref=\"htmlViewer\""));
    assert!(vue.contains("class=\"html-viewer\""));
    assert!(read(&temp_dir, "viewers/HTMLViewer/HTMLViewer.stories.js").contains("htmlViewer.args"));
}

#[test]
fn test_declined_confirmation_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::new().with_confirm(true).with_confirm(false);
    let mut session = session(&temp_dir, prompter);

    let err = run(&MakePageComponentCommand::new("pages/Profile"), &mut session).unwrap_err();
    assert!(matches!(err, ScaffoldError::Aborted));
    assert!(!temp_dir.path().join("pages").exists());

    let code = session.report_error(&err);
    assert_eq!(code, 0);
    assert_eq!(session.prompter().infos().last().map(String::as_str), Some("Scaffolding cancelled."));
    assert!(session.prompter().errors().is_empty());
}

#[test]
fn test_empty_path_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = session(&temp_dir, ScriptedPrompter::new());

    let code = commands::execute(&MakeComponentCommand::new("/"), &mut session);

    assert_eq!(code, 1);
    assert!(session.prompter().questions().is_empty());
    assert_eq!(session.prompter().errors().len(), 1);
}

#[test]
fn test_published_stub_is_used_for_scaffolding() {
    let temp_dir = TempDir::new().unwrap();
    let stubs_dir = temp_dir.path().join("stubs");
    let mut session = Session::new(
        ScriptedPrompter::new().with_confirm(false).with_confirm(true),
        LocalFilesystem,
        StubLoader::new(Some(stubs_dir.clone())),
        temp_dir.path().join("app"),
    );

    StubsCommand::Publish { force: false }.execute(&mut session).unwrap();
    let custom = stubs_dir.join("MakeComponent").join("Component.stories.js.stub");
    assert!(custom.exists());
    fs::write(&custom, "// story for {{pascalName}} at {{toRoot}}\n").unwrap();

    fs::create_dir(temp_dir.path().join("app")).unwrap();
    run(&MakeComponentCommand::new("widgets/InfoCard"), &mut session).unwrap();

    assert_eq!(
        read(&temp_dir, "app/widgets/InfoCard/InfoCard.stories.js"),
        "// story for InfoCard at ../../\n"
    );
    assert!(read(&temp_dir, "app/widgets/InfoCard/InfoCard.vue").contains("name: 'InfoCard'"));
}

#[test]
fn test_generated_paths_are_relative() {
    let temp_dir = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::new().with_confirm(false).with_confirm(true);
    let mut session = session(&temp_dir, prompter);

    let scaffolded = run(&MakePageComponentCommand::new("pages/Profile"), &mut session).unwrap();
    let paths: Vec<_> = scaffolded.files.iter().map(|file| file.path.clone()).collect();

    assert_eq!(
        paths,
        [
            PathBuf::from("pages/Profile/Profile.vue"),
            PathBuf::from("pages/Profile/Profile.spec.js"),
            PathBuf::from("pages/Profile/Profile.stories.js"),
        ]
    );
}
