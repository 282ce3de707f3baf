//! Source texts shared by several test modules.

/// A resource file with variables and two keywords.
pub const COMMON_RESOURCE: &str = "\
*** Settings ***
Library    SeleniumLibrary
Documentation    Shared helpers

*** Variables ***
${BASE_URL}    http://localhost:8080
@{USERS}    alice    bob

*** Keywords ***
Open App
    [Documentation]    Opens the application
    [Arguments]    ${url}=${BASE_URL}
    Open Browser    ${url}    chrome
Find
    [Arguments]    ${locator}
    Wait Until Element Is Visible    ${locator}
";

/// A second resource also declaring `Find`.
pub const BROWSER_RESOURCE: &str = "\
*** Keywords ***
Find
    Get WebElement    css:body
Close All
    Close All Browsers
";

/// A suite calling keywords from both resources.
pub const LOGIN_SUITE: &str = "\
*** Settings ***
Resource    common.resource
Resource    browser.resource
Suite Setup    Open App
Suite Teardown    browser.Close All

*** Test Cases ***
Valid Login
    [Tags]    smoke
    Open App
    common.Find    id:username
    ${title}=    Get Title
    Run Keywords    Find    id:ok    AND    Close All

Templated Login
    [Template]    common.Find
    id:first
    id:second
";

pub const HELPERS_PY: &str = "\
import time

def wait_for_ready(timeout=10, *checks):
    time.sleep(timeout)

def _private():
    pass

# def commented_out():
#     pass

class Session:
    def log_in(self, user, password=None):
        pass
";

pub const BUILTIN_JSON: &str = r#"{
    "name": "BuiltIn",
    "version": "7.0",
    "keywords": [
        {"name": "Log", "args": "message, level=INFO", "doc": "Logs the given message."},
        {"name": "Run Keywords", "args": ["keywords"]},
        {"name": "Find", "args": ["item"]}
    ]
}"#;
