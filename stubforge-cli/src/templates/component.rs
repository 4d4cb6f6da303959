//! Default stubs for `make:component`

/// Single file component with the collected props
pub const COMPONENT_VUE: &str = r#"<template>
    <div class="{{kebabName}}" ref="{{camelName}}">
        <slot />
    </div>
</template>

<script>
export default {
    name: '{{pascalName}}',
{{#if props}}

    props: {
{{#each props}}
        {{name}}: {
            type: [{{#each types}}{{this}}{{#unless @last}}, {{/unless}}{{/each}}],
            default: {{defaultExpression}},
        },
{{/each}}
    },
{{/if}}
};
</script>

<style lang="scss" scoped>
@import '{{rootPrefix}}assets/scss/variables';

.{{kebabName}} {
}
</style>
"#;

/// Unit test mounting the component with example props
pub const COMPONENT_SPEC_JS: &str = r"import { shallowMount } from '@vue/test-utils';
import {{pascalName}} from './{{pascalName}}.vue';
import { defaultMocks } from '{{rootPrefix}}tests/mocks';

describe('{{pascalName}}', () => {
    const factory = (propsData = {}) => shallowMount({{pascalName}}, {
        propsData: {
{{#each props}}
            {{name}}: {{exampleLiteralExpression}},
{{/each}}
            ...propsData,
        },
        mocks: defaultMocks,
    });

    it('renders the {{kebabName}} root element', () => {
        const {{camelName}} = factory();

        expect({{camelName}}.classes()).toContain('{{kebabName}}');
    });
});
";

/// Storybook story with example props as args
pub const COMPONENT_STORIES_JS: &str = r#"import {{pascalName}} from './{{pascalName}}.vue';

export default {
    title: 'Components/{{pascalName}}',
    component: {{pascalName}},
};

export const {{camelName}} = (args, { argTypes }) => ({
    components: { {{pascalName}} },
    props: Object.keys(argTypes),
    template: '<{{kebabName}} v-bind="$props" />',
});

{{camelName}}.args = {
{{#each props}}
    {{name}}: {{exampleLiteralExpression}},
{{/each}}
};
"#;
