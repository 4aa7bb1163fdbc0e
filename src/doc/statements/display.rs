/*!
# `display <string>...`
Also written `text`. Abbreviation `di`.
## Purpose
Shows text on the two character display.

## Example
```text
display 'hi'
```

*/
